//! Undirected edge keys.

/// An undirected mesh edge, stored as `(min, max)` vertex indices.
///
/// `EdgeKey::new(a, b) == EdgeKey::new(b, a)`, so the key can be used to
/// deduplicate edges shared by two adjacent triangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    lo: u32,
    hi: u32,
}

impl EdgeKey {
    /// Creates the key for the edge between vertices `a` and `b`.
    #[inline]
    pub fn new(a: u32, b: u32) -> Self {
        if a < b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// The smaller vertex index.
    #[inline]
    pub fn lo(self) -> u32 {
        self.lo
    }

    /// The larger vertex index.
    #[inline]
    pub fn hi(self) -> u32 {
        self.hi
    }

    /// The three edges of a triangle, in winding order `ab`, `bc`, `ca`.
    #[inline]
    pub fn of_face(face: [u32; 3]) -> [Self; 3] {
        let [a, b, c] = face;
        [Self::new(a, b), Self::new(b, c), Self::new(c, a)]
    }
}
