//! Chunking plans for splitting input across update calls

/// How to cut an input into consecutive chunks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkPlan {
    /// The whole input in one chunk
    Whole,
    /// Chunks of a fixed size; the last one may be shorter
    Fixed(usize),
    /// Cut at the given offsets (clamped to the input and sorted)
    At(Vec<usize>),
}

impl ChunkPlan {
    /// Split `data` according to the plan
    ///
    /// Empty chunks are kept so that zero-length updates are exercised too.
    pub fn split<'a, T>(&self, data: &'a [T]) -> Vec<&'a [T]> {
        match self {
            ChunkPlan::Whole => vec![data],
            ChunkPlan::Fixed(size) => data.chunks((*size).max(1)).collect(),
            ChunkPlan::At(offsets) => {
                let mut points: Vec<usize> = offsets.iter().map(|&o| o.min(data.len())).collect();
                points.sort_unstable();

                let mut chunks = Vec::with_capacity(points.len() + 1);
                let mut start = 0;
                for point in points {
                    chunks.push(&data[start..point]);
                    start = point;
                }
                chunks.push(&data[start..]);
                chunks
            }
        }
    }

    /// Every two-way split of an input of `len` items
    pub fn every_split(len: usize) -> impl Iterator<Item = ChunkPlan> {
        (0..=len).map(|offset| ChunkPlan::At(vec![offset]))
    }
}
