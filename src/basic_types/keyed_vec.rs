use std::marker::PhantomData;
use std::ops::Index;
use std::ops::IndexMut;

/// Storage for elements of type `Value` which can only be indexed by `Key`, so a
/// [`crate::variables::VariableId`] can never be used to look up a constraint by accident.
#[derive(Debug, Clone)]
pub(crate) struct KeyedVec<Key, Value> {
    key: PhantomData<Key>,
    elements: Vec<Value>,
}

// Implemented by hand so `Default` is not required of `Key`.
impl<Key, Value> Default for KeyedVec<Key, Value> {
    fn default() -> Self {
        Self {
            key: PhantomData,
            elements: Vec::default(),
        }
    }
}

impl<Key: StorageKey, Value> KeyedVec<Key, Value> {
    pub(crate) fn len(&self) -> usize {
        self.elements.len()
    }

    /// Appends `value` and returns the key under which it is stored.
    pub(crate) fn push(&mut self, value: Value) -> Key {
        let key = Key::create_from_index(self.elements.len());
        self.elements.push(value);
        key
    }

    pub(crate) fn get(&self, key: Key) -> Option<&Value> {
        self.elements.get(key.index())
    }

    pub(crate) fn get_mut(&mut self, key: Key) -> Option<&mut Value> {
        self.elements.get_mut(key.index())
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = Key> {
        (0..self.elements.len()).map(Key::create_from_index)
    }
}

impl<Key: StorageKey, Value> Index<Key> for KeyedVec<Key, Value> {
    type Output = Value;

    fn index(&self, index: Key) -> &Self::Output {
        &self.elements[index.index()]
    }
}

impl<Key: StorageKey, Value> IndexMut<Key> for KeyedVec<Key, Value> {
    fn index_mut(&mut self, index: Key) -> &mut Self::Output {
        &mut self.elements[index.index()]
    }
}

/// Implemented by the identifiers that index a [`KeyedVec`].
pub(crate) trait StorageKey {
    fn index(&self) -> usize;

    fn create_from_index(index: usize) -> Self;
}
