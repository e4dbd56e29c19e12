/// Map of running sums per key, alongside the grand total across all keys.
#[derive(Debug, Clone)]
pub struct Aggregate<K, V> {
    m: std::collections::HashMap<K, V>,
    sum: V,
}

impl<K, V> Default for Aggregate<K, V>
where
    V: Default,
{
    fn default() -> Self {
        Self {
            m: Default::default(),
            sum: Default::default(),
        }
    }
}

impl<K, V> PartialEq for Aggregate<K, V>
where
    K: Eq + std::hash::Hash,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.m == other.m && self.sum == other.sum
    }
}

impl<K, V> Eq for Aggregate<K, V>
where
    K: Eq + std::hash::Hash,
    V: Eq,
{
}

impl<K, V> Aggregate<K, V> {
    pub fn sum(&self) -> V
    where
        V: Copy,
    {
        self.sum
    }

    pub fn is_empty(&self) -> bool {
        self.m.is_empty()
    }

    pub fn len(&self) -> usize {
        self.m.len()
    }

    pub fn add(&mut self, key: K, value: V)
    where
        K: Eq + std::hash::Hash,
        V: Copy + Default + std::ops::AddAssign,
    {
        *(self.m.entry(key).or_default()) += value;
        self.sum += value;
    }

    pub fn get(&self, key: &K) -> Option<V>
    where
        K: Eq + std::hash::Hash,
        V: Copy,
    {
        self.m.get(key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, V)>
    where
        V: Copy,
    {
        self.m.iter().map(|(k, &v)| (k, v))
    }
}

impl<K, V> IntoIterator for Aggregate<K, V> {
    type Item = (K, V);
    type IntoIter = std::collections::hash_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.m.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Aggregate<K, V>
where
    K: Eq + std::hash::Hash,
    V: Copy + Default + std::ops::AddAssign,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut agg = Aggregate::<K, V>::default();
        for (k, v) in iter {
            agg.add(k, v);
        }
        agg
    }
}
