//! Algebra policies for the segment trees.
//!
//! A policy fixes the monoid (and for the lazy tree, the operator monoid
//! and its action) at the type level; the trees themselves stay agnostic
//! of the arithmetic.

/// A monoid over `Data`: `combine` must be associative and `unit` a
/// two-sided identity for it.
pub trait Monoid {
    type Data: Clone;

    fn unit() -> Self::Data;
    fn combine(a: &Self::Data, b: &Self::Data) -> Self::Data;
}

/// Monoid plus an operator monoid acting on it, for lazy range updates.
///
/// Operators compose left-to-right in application order:
/// `compose(first, second)` is "apply `first`, then `second`", and the
/// action must satisfy `act(act(d, o1), o2) == act(d, compose(o1, o2))`.
/// `op_unit()` must act as the identity: `act(d, op_unit(), len) == d`.
///
/// `len` is the number of leaves the aggregate spans, so sum-style
/// aggregates can scale a range update; point-wise actions ignore it.
pub trait LazyPolicy {
    type Data: Clone;
    type Op: Clone;

    fn data_unit() -> Self::Data;
    fn op_unit() -> Self::Op;
    fn combine(a: &Self::Data, b: &Self::Data) -> Self::Data;
    fn act(d: &Self::Data, op: &Self::Op, len: usize) -> Self::Data;
    fn compose(first: &Self::Op, second: &Self::Op) -> Self::Op;
}

/// Range-sum aggregate with range-add updates.
pub struct RangeAddSum;

impl Monoid for RangeAddSum {
    type Data = i64;

    fn unit() -> i64 {
        0
    }

    fn combine(a: &i64, b: &i64) -> i64 {
        a + b
    }
}

impl LazyPolicy for RangeAddSum {
    type Data = i64;
    type Op = i64;

    fn data_unit() -> i64 {
        0
    }

    fn op_unit() -> i64 {
        0
    }

    fn combine(a: &i64, b: &i64) -> i64 {
        a + b
    }

    fn act(d: &i64, op: &i64, len: usize) -> i64 {
        d + op * len as i64
    }

    fn compose(first: &i64, second: &i64) -> i64 {
        first + second
    }
}

/// Range-min aggregate with range-add updates.
pub struct RangeAddMin;

impl RangeAddMin {
    /// Identity of `min`; large enough that adds never wrap.
    pub const INF: i64 = i64::MAX / 4;
}

impl LazyPolicy for RangeAddMin {
    type Data = i64;
    type Op = i64;

    fn data_unit() -> i64 {
        Self::INF
    }

    fn op_unit() -> i64 {
        0
    }

    fn combine(a: &i64, b: &i64) -> i64 {
        *a.min(b)
    }

    fn act(d: &i64, op: &i64, _len: usize) -> i64 {
        d + op
    }

    fn compose(first: &i64, second: &i64) -> i64 {
        first + second
    }
}

/// "Assign, then add" operator. Non-commutative under composition, which
/// makes it the interesting policy for exercising lazy push-down order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LazyOp {
    pub assign: Option<i64>,
    pub add: i64,
}

impl LazyOp {
    pub fn assign(value: i64) -> Self {
        Self {
            assign: Some(value),
            add: 0,
        }
    }

    pub fn add(delta: i64) -> Self {
        Self {
            assign: None,
            add: delta,
        }
    }
}

/// Range-sum aggregate with range-assign and range-add updates.
pub struct AssignAddSum;

impl LazyPolicy for AssignAddSum {
    type Data = i64;
    type Op = LazyOp;

    fn data_unit() -> i64 {
        0
    }

    fn op_unit() -> LazyOp {
        LazyOp { assign: None, add: 0 }
    }

    fn combine(a: &i64, b: &i64) -> i64 {
        a + b
    }

    fn act(d: &i64, op: &LazyOp, len: usize) -> i64 {
        let base = match op.assign {
            Some(v) => v * len as i64,
            None => *d,
        };
        base + op.add * len as i64
    }

    fn compose(first: &LazyOp, second: &LazyOp) -> LazyOp {
        // A later assign wipes everything before it; a later add stacks on
        // top of whatever the earlier operator produced.
        match second.assign {
            Some(_) => *second,
            None => LazyOp {
                assign: first.assign,
                add: first.add + second.add,
            },
        }
    }
}

/// Range-max monoid for the point-update tree.
pub struct MaxMonoid;

impl MaxMonoid {
    pub const NEG_INF: i64 = i64::MIN / 4;
}

impl Monoid for MaxMonoid {
    type Data = i64;

    fn unit() -> i64 {
        Self::NEG_INF
    }

    fn combine(a: &i64, b: &i64) -> i64 {
        *a.max(b)
    }
}
