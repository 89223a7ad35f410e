use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    pub user_id: String,
    pub user_email: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default = "default_max_attachment_mb")]
    pub max_attachment_mb: u64,
}

fn default_max_attachment_mb() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            user_id: "local".to_string(),
            user_email: "local@localhost".to_string(),
            user_name: String::new(),
            max_attachment_mb: default_max_attachment_mb(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("schooltasks")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("schooltasks.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("schooltasks.sqlite")
    }

    /// Per-file attachment size cap in bytes.
    pub fn max_attachment_bytes(&self) -> i64 {
        (self.max_attachment_mb * 1024 * 1024) as i64
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(
        custom_db: Option<String>,
        email: Option<String>,
        name: Option<String>,
        is_test: bool,
    ) -> io::Result<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(db_name) = custom_db {
            let p = std::path::Path::new(&db_name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            dir.join("schooltasks.sqlite")
        };

        let email = email.unwrap_or_else(|| "local@localhost".to_string());
        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            // Identity is local; the email doubles as the stable user id.
            user_id: email.clone(),
            user_email: email,
            user_name: name.unwrap_or_default(),
            max_attachment_mb: default_max_attachment_mb(),
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).unwrap();
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(config)
    }
}
