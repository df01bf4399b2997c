use crate::error::DescribeError;

/// Holds the single API key used for every generation request in a session.
#[derive(Debug, Default, Clone)]
pub struct CredentialHolder {
    key: Option<String>,
}

impl CredentialHolder {
    pub fn new(initial: Option<String>) -> Self {
        let mut holder = CredentialHolder::default();
        if let Some(key) = initial {
            holder.set(&key);
        }
        holder
    }

    /// Stores `key` unless one is already held or the input is blank.
    /// Returns whether the stored value changed.
    pub fn set(&mut self, key: &str) -> bool {
        let key = key.trim();
        if self.key.is_some() || key.is_empty() {
            return false;
        }
        self.key = Some(key.to_string());
        true
    }

    pub fn get(&self) -> Result<&str, DescribeError> {
        self.key.as_deref().ok_or(DescribeError::MissingCredential)
    }

    pub fn is_set(&self) -> bool {
        self.key.is_some()
    }
}
