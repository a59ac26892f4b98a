/// Dynamic connectivity over a fixed universe of ids `0..count`.
///
/// Weighted quick-union: the smaller tree is hung below the root of the larger one,
/// and `union` compresses the paths it walks. Queries only read, so `connected`
/// works through a shared reference.
#[derive(Debug, Clone)]
pub struct EquivalenceClass
{
    data: Vec<usize>,  // parent links, a root points to itself
    sizes: Vec<usize>, // only meaningful at roots
    n_classes: usize,
}

impl EquivalenceClass
{
    pub fn new(count: usize) -> Self
    {
        let data: Vec<usize> = (0..count).collect();
        let sizes            = vec![1; count];
        Self { data, sizes, n_classes: count }
    }
    /// Number of disjoint sets currently held.
    #[inline]
    pub fn component_count(&self) -> usize
    {
        self.n_classes
    }
    /// Root of the set containing `label`. Panics if `label` is outside the universe.
    #[inline]
    pub fn find(&self, mut label: usize) -> usize
    {
        while self.data[label] != label
        {
            label = self.data[label];
        }
        label
    }
    #[inline]
    fn find_and_compress(&mut self, label: usize) -> usize
    {
        let root        = self.find(label);
        let mut current = label;
        while self.data[current] != root
        {
            let next           = self.data[current];
            self.data[current] = root;
            current            = next;
        }
        root
    }
    #[inline]
    pub fn connected(&self, label1: usize, label2: usize) -> bool
    {
        self.find(label1) == self.find(label2)
    }
    /// Merges the sets of `label1` and `label2`. Returns `false` when they were already one set.
    pub fn union(&mut self, label1: usize, label2: usize) -> bool
    {
        let l1 = self.find_and_compress(label1);
        let l2 = self.find_and_compress(label2);
        if l1 == l2
        {
            return false;
        }
        let (small, large) = if self.sizes[l1] < self.sizes[l2] { (l1, l2) } else { (l2, l1) };
        self.data[small]   = large;
        self.sizes[large] += self.sizes[small];
        self.n_classes    -= 1;
        true
    }
}


#[cfg(test)]
mod proptests
{
    use super::*;
    use proptest::prelude::*;

    // Quick-find reference: every id carries its set label explicitly.
    fn quick_find_labels(n: usize, ops: &[(usize, usize)]) -> Vec<usize>
    {
        let mut labels: Vec<usize> = (0..n).collect();
        for &(a, b) in ops
        {
            let (from, to) = (labels[a], labels[b]);
            labels.iter_mut().filter(|l| **l == from).for_each(|l| *l = to);
        }
        labels
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn agrees_with_quick_find(
            n in 1_usize..24,
            raw_ops in proptest::collection::vec((0_usize..24, 0_usize..24), 0..60),
        ) {
            let ops: Vec<(usize, usize)> = raw_ops.into_iter().map(|(a, b)| (a % n, b % n)).collect();
            let mut classes = EquivalenceClass::new(n);
            for &(a, b) in &ops
            {
                classes.union(a, b);
            }
            let labels = quick_find_labels(n, &ops);
            for a in 0..n
            {
                for b in 0..n
                {
                    prop_assert_eq!(classes.connected(a, b), labels[a] == labels[b]);
                }
            }
        }

        #[test]
        fn component_count_matches_distinct_roots(
            n in 1_usize..24,
            raw_ops in proptest::collection::vec((0_usize..24, 0_usize..24), 0..40),
        ) {
            let mut classes = EquivalenceClass::new(n);
            for (a, b) in raw_ops
            {
                classes.union(a % n, b % n);
            }
            let roots = (0..n).filter(|&i| classes.find(i) == i).count();
            prop_assert_eq!(classes.component_count(), roots);
        }
    }
}
