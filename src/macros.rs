/// Declares a dense `u32`-backed index type. The string is the prefix
/// used by its `Debug` output (`v3`, `L0`, ...).
macro_rules! index {
    ($(#[$attr:meta])* pub struct $name:ident = $prefix:expr;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
        pub struct $name {
            u32_index: u32
        }

        impl From<usize> for $name {
            fn from(index: usize) -> $name {
                assert!(index < ::std::u32::MAX as usize);
                $name {
                    u32_index: index as u32
                }
            }
        }

        impl From<$name> for usize {
            fn from(index: $name) -> usize {
                index.index()
            }
        }

        impl $name {
            pub fn index(self) -> usize {
                self.u32_index as usize
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, fmt: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                write!(fmt, "{}{}", $prefix, self.u32_index)
            }
        }
    }
}
