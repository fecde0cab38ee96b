/// Implements the string side of a named style token: `Display`, strict
/// `FromStr`, and the `TryFrom<String>`/`Into<&'static str>` pair serde
/// uses.
///
/// The token type needs an `ALL` constant and a `name()` method.
macro_rules! impl_named_token {
    ($ty:ident, $error:ident) => {
        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl ::std::str::FromStr for $ty {
            type Err = $crate::StyleError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match $ty::ALL.into_iter().find(|token| token.name() == s) {
                    Some(token) => Ok(token),
                    None => {
                        ::tracing::warn!(
                            token = stringify!($ty),
                            name = s,
                            "rejected unknown style token"
                        );
                        Err($crate::StyleError::$error(s.to_string()))
                    }
                }
            }
        }

        impl TryFrom<String> for $ty {
            type Error = $crate::StyleError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$ty> for &'static str {
            fn from(token: $ty) -> Self {
                token.name()
            }
        }
    };
}

pub(crate) use impl_named_token;
