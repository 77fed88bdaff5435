/// Offsets of the five parts of a range being assembled:
/// `[prefix][first value][infix][second value][suffix]`.
///
/// Only lengths are stored; the four boundary indices are derived, so growing
/// one part shifts every later boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RangeBoundaries {
    start: usize,
    length_prefix: usize,
    length1: usize,
    length_infix: usize,
    length2: usize,
    length_suffix: usize,
    // Code points that merged decorations put before the first value and after the
    // second one. They are counted in the infix.
    shared_prefix: usize,
    shared_suffix: usize,
}

impl RangeBoundaries {
    pub fn new(start: usize, prefix: usize, infix: usize, suffix: usize) -> Self {
        Self {
            start,
            length_prefix: prefix,
            length_infix: infix,
            length_suffix: suffix,
            ..Self::default()
        }
    }

    /// Start of the first value.
    pub fn index0(&self) -> usize {
        self.start + self.length_prefix
    }

    /// End of the first value.
    pub fn index1(&self) -> usize {
        self.index0() + self.length1
    }

    /// Start of the second value.
    pub fn index2(&self) -> usize {
        self.index1() + self.length_infix
    }

    /// End of the second value.
    pub fn index3(&self) -> usize {
        self.index2() + self.length2
    }

    pub fn end(&self) -> usize {
        self.index3() + self.length_suffix
    }

    pub fn grow_first(&mut self, n: usize) {
        self.length1 += n;
    }

    pub fn grow_second(&mut self, n: usize) {
        self.length2 += n;
    }

    pub fn grow_infix(&mut self, n: usize) {
        self.length_infix += n;
    }

    /// Records a decoration applied once around both values.
    pub fn grow_shared(&mut self, prefix: usize, total: usize) {
        self.length_infix += total;
        self.shared_prefix += prefix;
        self.shared_suffix += total - prefix;
    }

    /// Code point range covered by the first value and its own decorations.
    pub fn first_region(&self) -> std::ops::Range<usize> {
        (self.index0() + self.shared_prefix)..(self.index1() + self.shared_prefix)
    }

    /// Code point range covered by the second value and its own decorations.
    pub fn second_region(&self) -> std::ops::Range<usize> {
        (self.index2() - self.shared_suffix)..(self.index3() - self.shared_suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn growth_shifts_later_boundaries() {
        let mut b = RangeBoundaries::new(0, 1, 3, 0);
        b.grow_first(2);
        assert_eq!((b.index0(), b.index1(), b.index2(), b.index3()), (1, 3, 6, 6));
        b.grow_second(4);
        b.grow_infix(2);
        assert_eq!((b.index2(), b.index3(), b.end()), (8, 12, 12));
    }

    #[test]
    fn shared_decoration_keeps_value_regions() {
        // "3-5" then " m" applied around both: "3-5 m"
        let mut b = RangeBoundaries::new(0, 0, 1, 0);
        b.grow_first(1);
        b.grow_second(1);
        b.grow_shared(0, 2);
        assert_eq!(b.first_region(), 0..1);
        assert_eq!(b.second_region(), 2..3);
        assert_eq!(b.index3(), 5);

        // "$" prefix around both: "$3-5 m"
        b.grow_shared(1, 1);
        assert_eq!(b.first_region(), 1..2);
        assert_eq!(b.second_region(), 3..4);
        assert_eq!(b.index3(), 6);
    }
}
