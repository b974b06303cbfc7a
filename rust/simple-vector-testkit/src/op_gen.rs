//! Random mutation sequences for differential testing.
//!
//! [`random_ops`] produces a sequence of [`VecOp`]s that are valid when
//! applied in order starting from an empty container: positions always fall in
//! the live range and `PopBack` never hits an empty container. The same
//! sequence replayed through [`apply_to_model`] on a `Vec<i64>` gives the
//! expected contents after every step.

/// A single mutation of a sequence container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VecOp {
    PushBack(i64),
    Insert { position: usize, value: i64 },
    Erase(usize),
    PopBack,
    Resize(usize),
    Reserve(usize),
    Clear,
}

/// Shape of a generated operation sequence.
#[derive(Debug, Clone, Copy)]
pub struct OpGenConfig {
    /// Number of operations to produce.
    pub count: usize,
    /// Upper bound for `Resize` targets and `Reserve` requests.
    pub max_len: usize,
    /// Relative weight of `Clear`; everything else has weight 4.
    pub clear_weight: u32,
}

impl Default for OpGenConfig {
    fn default() -> Self {
        OpGenConfig {
            count: 1000,
            max_len: 64,
            clear_weight: 1,
        }
    }
}

/// Generates a valid operation sequence from `seed`.
pub fn random_ops(seed: u64, config: OpGenConfig) -> Vec<VecOp> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut len = 0usize;
    let mut ops = Vec::with_capacity(config.count);
    let total_weight = 4 * 6 + config.clear_weight;

    while ops.len() < config.count {
        let pick = rng.u32(0..total_weight);
        let op = match pick / 4 {
            0 => VecOp::PushBack(rng.i64(-1000..1000)),
            1 => VecOp::Insert {
                position: rng.usize(0..=len),
                value: rng.i64(-1000..1000),
            },
            2 if len > 0 => VecOp::Erase(rng.usize(0..len)),
            3 if len > 0 => VecOp::PopBack,
            4 => VecOp::Resize(rng.usize(0..=config.max_len)),
            5 => VecOp::Reserve(rng.usize(0..=config.max_len * 2)),
            6.. => VecOp::Clear,
            _ => continue,
        };
        len = next_len(len, &op);
        ops.push(op);
    }
    ops
}

/// Applies `op` to the reference model.
pub fn apply_to_model(model: &mut Vec<i64>, op: &VecOp) {
    match *op {
        VecOp::PushBack(value) => model.push(value),
        VecOp::Insert { position, value } => model.insert(position, value),
        VecOp::Erase(position) => {
            model.remove(position);
        }
        VecOp::PopBack => {
            model.pop();
        }
        VecOp::Resize(len) => model.resize(len, 0),
        VecOp::Reserve(capacity) => model.reserve(capacity.saturating_sub(model.len())),
        VecOp::Clear => model.clear(),
    }
}

fn next_len(len: usize, op: &VecOp) -> usize {
    match op {
        VecOp::PushBack(_) | VecOp::Insert { .. } => len + 1,
        VecOp::Erase(_) | VecOp::PopBack => len - 1,
        VecOp::Resize(new_len) => *new_len,
        VecOp::Reserve(_) => len,
        VecOp::Clear => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ops_are_replayable() {
        let ops = random_ops(42, OpGenConfig::default());
        assert_eq!(ops.len(), 1000);
        let mut model = Vec::new();
        for op in &ops {
            apply_to_model(&mut model, op);
        }
    }

    #[test]
    fn test_same_seed_same_ops() {
        let config = OpGenConfig {
            count: 50,
            ..Default::default()
        };
        assert_eq!(random_ops(7, config), random_ops(7, config));
    }
}
