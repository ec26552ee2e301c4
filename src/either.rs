/// Value produced by an alternation: which branch matched, and its value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    pub fn left(self) -> Option<L> {
        match self {
            Either::Left(value) => Some(value),
            Either::Right(_) => None,
        }
    }

    pub fn right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(value) => Some(value),
        }
    }

    /// Collapse both branches to one type
    pub fn either<U>(self, on_left: impl FnOnce(L) -> U, on_right: impl FnOnce(R) -> U) -> U {
        match self {
            Either::Left(value) => on_left(value),
            Either::Right(value) => on_right(value),
        }
    }
}

impl<T> Either<T, T> {
    /// Collapse an alternation whose branches share a type
    pub fn into_inner(self) -> T {
        match self {
            Either::Left(value) | Either::Right(value) => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_inner() {
        let left: Either<u8, u8> = Either::Left(1);
        let right: Either<u8, u8> = Either::Right(2);
        assert_eq!(left.into_inner(), 1);
        assert_eq!(right.into_inner(), 2);
    }

    #[test]
    fn test_accessors() {
        let value: Either<char, u32> = Either::Right(7);
        assert!(value.is_right());
        assert!(!value.is_left());
        assert_eq!(value.left(), None);
        assert_eq!(value.right(), Some(7));
        assert_eq!(value.either(|c| c as u32, |n| n + 1), 8);
    }
}
