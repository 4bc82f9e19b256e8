//! Base implementation of records for logging.
use crate::error::RecordError;
use std::collections::HashMap;

/// Represents possible types of values that can be stored in a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValue {
    /// A single floating-point value, e.g., the number of steps in an episode.
    Scalar(f32),

    /// A 1-dimensional array, e.g., a reward vector.
    Array1(Vec<f32>),

    /// A text value, e.g., the reason an episode ended.
    String(String),
}

/// A container for storing key-value pairs of various data types.
///
/// # Examples
///
/// ```rust
/// use ftn_core::record::{Record, RecordValue};
///
/// let mut record = Record::from_scalar("steps", 5.0);
/// record.insert("reward", RecordValue::Array1(vec![1.0, 2.0]));
///
/// assert_eq!(record.get_scalar("steps").unwrap(), 5.0);
/// assert_eq!(record.get_array1("reward").unwrap(), vec![1.0, 2.0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Record(HashMap<String, RecordValue>);

impl Record {
    /// Creates an empty record.
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    /// Creates a record containing a single scalar value.
    pub fn from_scalar(name: impl Into<String>, value: f32) -> Self {
        Self(HashMap::from([(name.into(), RecordValue::Scalar(value))]))
    }

    /// Creates a record from a slice of key-value pairs.
    pub fn from_slice<K: Into<String> + Clone>(s: &[(K, RecordValue)]) -> Self {
        Self(
            s.iter()
                .map(|(k, v)| (k.clone().into(), v.clone()))
                .collect(),
        )
    }

    /// Inserts a key-value pair into the record.
    pub fn insert(&mut self, k: impl Into<String>, v: RecordValue) {
        self.0.insert(k.into(), v);
    }

    /// Gets a reference to the value associated with the given key.
    pub fn get(&self, k: &str) -> Option<&RecordValue> {
        self.0.get(k)
    }

    /// Merges another record into this one in place.
    ///
    /// Values of `record` overwrite values of `self` with the same key.
    pub fn merge_inplace(&mut self, record: Record) {
        for (k, v) in record.0 {
            self.0.insert(k, v);
        }
    }

    /// Gets a scalar value from the record.
    ///
    /// # Errors
    ///
    /// Returns an error if the key does not exist or the value is not a scalar.
    pub fn get_scalar(&self, k: &str) -> Result<f32, RecordError> {
        match self.0.get(k) {
            Some(RecordValue::Scalar(v)) => Ok(*v),
            Some(_) => Err(RecordError::RecordValueTypeError("Scalar".to_string())),
            None => Err(RecordError::RecordKeyError(k.to_string())),
        }
    }

    /// Gets a 1-dimensional array from the record.
    ///
    /// # Errors
    ///
    /// Returns an error if the key does not exist or the value is not an array.
    pub fn get_array1(&self, k: &str) -> Result<Vec<f32>, RecordError> {
        match self.0.get(k) {
            Some(RecordValue::Array1(v)) => Ok(v.clone()),
            Some(_) => Err(RecordError::RecordValueTypeError("Array1".to_string())),
            None => Err(RecordError::RecordKeyError(k.to_string())),
        }
    }

    /// Gets a string value from the record.
    ///
    /// # Errors
    ///
    /// Returns an error if the key does not exist or the value is not a string.
    pub fn get_string(&self, k: &str) -> Result<String, RecordError> {
        match self.0.get(k) {
            Some(RecordValue::String(s)) => Ok(s.clone()),
            Some(_) => Err(RecordError::RecordValueTypeError("String".to_string())),
            None => Err(RecordError::RecordKeyError(k.to_string())),
        }
    }

    /// Checks if the record is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_getters() {
        let record = Record::from_slice(&[
            ("steps", RecordValue::Scalar(3.0)),
            ("termination", RecordValue::String("step limit".to_string())),
        ]);

        assert_eq!(record.get_scalar("steps"), Ok(3.0));
        assert_eq!(record.get_string("termination").unwrap(), "step limit");
        assert_eq!(
            record.get_array1("steps"),
            Err(RecordError::RecordValueTypeError("Array1".to_string()))
        );
        assert_eq!(
            record.get_scalar("reward"),
            Err(RecordError::RecordKeyError("reward".to_string()))
        );
    }

    #[test]
    fn test_merge_overwrites() {
        let mut a = Record::from_scalar("step", 1.0);
        let mut b = Record::from_scalar("step", 2.0);
        b.insert("episode", RecordValue::Scalar(0.0));

        a.merge_inplace(b);
        assert_eq!(a.len(), 2);
        assert_eq!(a.get_scalar("step").unwrap(), 2.0);
        assert_eq!(a.get_scalar("episode").unwrap(), 0.0);

        let mut c = Record::empty();
        assert!(c.is_empty());
        c.merge_inplace(a);
        assert_eq!(c.len(), 2);
    }
}
