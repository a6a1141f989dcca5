use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use directories::ProjectDirs;

use crate::opt::*;

const APP_NAME: &str = "draft-gate";
const APP_AUTHOR: &str = "akio";
const APP_QUALIFIER: &str = "com";

const RUNTIME_FILE_NAME: &str = "runtime_data.json";

const CURRENT_ROOM_ID_KEY: &str = "current_room_id";

/// Per-user runtime data, kept as a flat string map in a JSON file under the
/// platform data directory. Holds the id of the room being drafted so a
/// restarted process resumes the same room.
pub struct AppContext {
    data: RwLock<HashMap<String, String>>,
    runtime_file: PathBuf,
}

pub fn create_context() -> Res<AppContext> {
    let project_dirs = ProjectDirs::from(APP_QUALIFIER, APP_AUTHOR, APP_NAME)
        .ok_or("Failed to get the project directory".to_string())?;

    let runtime_dir = project_dirs.data_local_dir();
    fs::create_dir_all(runtime_dir).err_to_str()?;

    AppContext::from_file(runtime_dir.join(RUNTIME_FILE_NAME))
}

impl AppContext {
    pub fn from_file(runtime_file: PathBuf) -> Res<AppContext> {
        let data = if Path::new(&runtime_file).exists() {
            let contents = fs::read_to_string(&runtime_file).err_to_str()?;
            serde_json::from_str(&contents).err_to_str()?
        } else {
            HashMap::new()
        };

        Ok(AppContext {
            data: RwLock::new(data),
            runtime_file,
        })
    }

    pub fn current_room_id(&self) -> Option<String> {
        self.read_data(CURRENT_ROOM_ID_KEY)
    }

    pub fn set_current_room_id(&self, room_id: &str) -> Res<()> {
        self.write_data(CURRENT_ROOM_ID_KEY, room_id)
    }

    pub fn clear_current_room_id(&self) -> Res<()> {
        let mut data_write = self.data.write().unwrap();
        data_write.remove(CURRENT_ROOM_ID_KEY);
        save_data(&self.runtime_file, &data_write)
    }

    pub fn read_data(&self, key: &str) -> Option<String> {
        let data_read = self.data.read().unwrap();
        data_read.get(key).map(|s| s.to_string())
    }

    pub fn write_data(&self, key: &str, value: &str) -> Res<()> {
        let mut data_write = self.data.write().unwrap();
        data_write.insert(key.to_string(), value.to_string());
        save_data(&self.runtime_file, &data_write)
    }
}

fn save_data(runtime_file: &Path, data: &HashMap<String, String>) -> Res<()> {
    let content = serde_json::to_string(data).err_to_str()?;
    fs::write(runtime_file, content).err_to_str()
}

#[cfg(test)]
mod test {
    use super::*;
    use tempfile::NamedTempFile;

    fn temp_file_path() -> PathBuf {
        NamedTempFile::new()
            .expect("Failed to create a temp file")
            .path()
            .to_path_buf()
    }

    #[test]
    fn test_read_write_data() {
        let context = AppContext::from_file(temp_file_path()).unwrap();

        assert_eq!(context.read_data("key"), None);

        context.write_data("key", "value").unwrap();
        assert_eq!(context.read_data("key"), Some("value".to_string()));
    }

    #[test]
    fn test_room_id_round_trip() {
        let path = temp_file_path();

        {
            let context = AppContext::from_file(path.clone()).unwrap();
            assert_eq!(context.current_room_id(), None);
            context.set_current_room_id("Ab3dEf9h").unwrap();
        }

        {
            let context = AppContext::from_file(path).unwrap();
            assert_eq!(context.current_room_id(), Some("Ab3dEf9h".to_string()));
        }
    }

    #[test]
    fn test_clear_room_id() {
        let context = AppContext::from_file(temp_file_path()).unwrap();

        context.set_current_room_id("Ab3dEf9h").unwrap();
        context.clear_current_room_id().unwrap();
        assert_eq!(context.current_room_id(), None);
    }
}
