macro_rules! impl_arith(
    ($type:ident<T>, $operation:ident, $method:ident, $impl:ident) => {
        impl<T: Ord + Clone> $operation for $type<T> {
            type Output = $type<T>;
            fn $method(self, other: $type<T>) -> Self::Output {
                self.$impl(&other)
            }
        }
        impl<T: Ord + Clone> $operation<&$type<T>> for $type<T> {
            type Output = $type<T>;
            fn $method(self, other: &$type<T>) -> Self::Output {
                self.$impl(other)
            }
        }
        impl<T: Ord + Clone> $operation<$type<T>> for &$type<T> {
            type Output = $type<T>;
            fn $method(self, other: $type<T>) -> Self::Output {
                self.$impl(&other)
            }
        }
        impl<T: Ord + Clone> $operation<&$type<T>> for &$type<T> {
            type Output = $type<T>;
            fn $method(self, other: &$type<T>) -> Self::Output {
                self.$impl(other)
            }
        }
    };
    ($type:ident, $operation:ident, $method:ident, $impl:ident) => {
        impl $operation for $type {
            type Output = $type;
            fn $method(self, other: $type) -> Self::Output {
                self.$impl(&other)
            }
        }
        impl $operation<&$type> for $type {
            type Output = $type;
            fn $method(self, other: &$type) -> Self::Output {
                self.$impl(other)
            }
        }
        impl $operation<$type> for &$type {
            type Output = $type;
            fn $method(self, other: $type) -> Self::Output {
                self.$impl(&other)
            }
        }
        impl $operation<&$type> for &$type {
            type Output = $type;
            fn $method(self, other: &$type) -> Self::Output {
                self.$impl(other)
            }
        }
    };
);

pub(crate) use impl_arith;
