/// Define a bitfield newtype with named flag constants
macro_rules! bitfield {
    (
        $( #[ $outer:meta ] )*
        pub struct $name:ident($ty:ty) {
            $(
                $( #[ $inner:meta ] )*
                pub const $flag:ident = $value:expr;
            )*
        }
    ) => {
        $( #[ $outer ] )*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name(pub(crate) $ty);

        impl $name {
            $(
                $( #[ $inner ] )*
                pub const $flag: $name = $name($value);
            )*

            /// A bitfield with no flags set
            pub const EMPTY: $name = $name(0);

            /// Wrap a raw bitfield value. Bits without a named flag are kept.
            pub const fn from_raw(raw: $ty) -> Self {
                Self(raw)
            }

            /// Get the raw value of this bitfield
            pub const fn raw(self) -> $ty {
                self.0
            }

            /// Check whether every flag set in `other` is also set in `self`
            pub fn contains(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }

            pub fn is_empty(self) -> bool {
                self.0 == 0
            }
        }

        impl std::ops::BitOr for $name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl std::ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }

        impl std::ops::BitAnd for $name {
            type Output = Self;

            fn bitand(self, rhs: Self) -> Self {
                Self(self.0 & rhs.0)
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str(concat!(stringify!($name), " "))?;
                let mut set = f.debug_set();
                $(
                    if $name::$flag.0 != 0 && self.contains($name::$flag) {
                        set.entry(&format_args!(stringify!($flag)));
                    }
                )*
                set.finish()
            }
        }
    };
}

/// Define a closed enum of named integer constants, with conversions from the
/// raw integer and from the canonical lower-case name.
///
/// Extra spellings accepted by `FromStr` may be given in an `aliases` block.
macro_rules! flag_enum {
    (
        $( #[ $outer:meta ] )*
        pub enum $name:ident($repr:ident) {
            $(
                $( #[ $inner:meta ] )*
                $variant:ident = $value:expr => $vname:literal
            ),* $(,)?
        }
        $(
            aliases {
                $( $alias:literal => $target:ident ),* $(,)?
            }
        )?
    ) => {
        $( #[ $outer ] )*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr($repr)]
        pub enum $name {
            $(
                $( #[ $inner ] )*
                $variant = $value,
            )*
        }

        impl $name {
            /// Every value of this enum, in declaration order
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),* ];

            /// Get the raw integer value of this enum
            pub fn raw(self) -> $repr {
                self as $repr
            }

            /// Get the canonical name of this value
            pub fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $vname, )*
                }
            }
        }

        impl std::convert::TryFrom<$repr> for $name {
            type Error = crate::Error;

            fn try_from(value: $repr) -> crate::Result<Self> {
                match value {
                    $( v if v == $name::$variant as $repr => Ok($name::$variant), )*
                    _ => Err(crate::Error::InvalidFlag {
                        value: value as i64,
                        context: stringify!($name),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::Error;

            fn from_str(s: &str) -> crate::Result<Self> {
                lazy_static::lazy_static! {
                    static ref BY_NAME: std::collections::HashMap<&'static str, $name> = {
                        #[allow(unused_mut)]
                        let mut names: std::collections::HashMap<_, _> =
                            $name::ALL.iter().map(|&v| (v.name(), v)).collect();
                        $( $( names.insert($alias, $name::$target); )* )?
                        names
                    };
                }

                BY_NAME.get(s).copied().ok_or_else(|| crate::Error::UnknownName {
                    name: s.to_owned(),
                    context: stringify!($name),
                })
            }
        }
    };
}

/// Define one marker type per descriptor, associating it with the type of
/// value a query for that descriptor returns. The match generated for
/// `result_kind` is exhaustive, so every descriptor must be listed exactly
/// once.
macro_rules! info_params {
    (
        $desc:ident;
        $(
            $( #[ $inner:meta ] )*
            $variant:ident => $out:ty;
        )*
    ) => {
        $(
            $( #[ $inner ] )*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
            pub struct $variant;

            impl crate::info::InfoParam for $variant {
                type Descriptor = $desc;
                type Output = $out;
                const DESCRIPTOR: $desc = $desc::$variant;
            }
        )*

        impl $desc {
            /// Get the kind of value a query for this descriptor returns
            pub fn result_kind(self) -> crate::info::ResultKind {
                match self {
                    $( $desc::$variant => <$out as crate::info::InfoOutput>::KIND, )*
                }
            }
        }
    };
}

/// Define typed accessors delegating to `InfoQuery::info`
macro_rules! info_funcs {
    (
        $(
            $( #[ $outer:meta ] )*
            pub fn $name:ident(&self) -> $ret:ty = $param:ty;
        )*
    ) => {
        $(
            $( #[ $outer ] )*
            pub fn $name(&self) -> crate::Result<$ret> {
                <Self as crate::util::InfoQuery>::info::<$param>(self)
            }
        )*
    };
}
