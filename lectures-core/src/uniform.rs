//! Named uniform values collected on the CPU before being uploaded to a
//! shader program.

use glam::{Mat4, Vec3};

/// A value that can be written to a GLSL uniform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Int(i32),
    Float(f32),
    Vec3(Vec3),
    Mat4(Mat4),
}

impl From<i32> for UniformValue {
    fn from(value: i32) -> Self {
        UniformValue::Int(value)
    }
}

impl From<f32> for UniformValue {
    fn from(value: f32) -> Self {
        UniformValue::Float(value)
    }
}

impl From<Vec3> for UniformValue {
    fn from(value: Vec3) -> Self {
        UniformValue::Vec3(value)
    }
}

impl From<Mat4> for UniformValue {
    fn from(value: Mat4) -> Self {
        UniformValue::Mat4(value)
    }
}

/// An ordered set of uniform assignments.
///
/// Setting a name that is already present replaces the value in place, so
/// upload order stays the order in which names were first set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UniformBlock {
    entries: Vec<(String, UniformValue)>,
}

impl UniformBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<UniformValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&UniformValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &UniformValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_existing_value_in_place() {
        let mut block = UniformBlock::new();
        block.set("a", 1);
        block.set("b", 2.0);
        block.set("a", 3);

        assert_eq!(block.len(), 2);
        assert_eq!(block.get("a"), Some(&UniformValue::Int(3)));
        let names: Vec<_> = block.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn test_missing_name() {
        let block = UniformBlock::new();
        assert!(block.is_empty());
        assert_eq!(block.get("viewPos"), None);
    }
}
