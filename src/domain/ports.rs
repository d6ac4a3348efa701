use crate::utils::error::Result;

/// Local key-value storage. Values are opaque bytes.
pub trait Storage {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>>;
    fn write(&self, key: &str, data: &[u8]) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, data: &[u8]) -> Result<()> {
        (**self).write(key, data)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

pub trait ConfigProvider {
    fn storage_path(&self) -> &str;
    fn emotions(&self) -> &[String];
    fn common_thoughts(&self) -> &[String];
    fn grounding_activities(&self) -> &[String];
    fn check_in_phrases(&self) -> &[String];
}
