//! Emptiness rules for attribute values

/// A value that can be wrapped in a [`Conf`](crate::Conf)
///
/// A value is empty when it is absent or the empty string. Everything else,
/// including `0`, `false` and empty collections, counts as observed.
pub trait AttributeValue {
    /// Whether the value is absent or the empty string
    fn is_empty_value(&self) -> bool;
}

impl AttributeValue for String {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl AttributeValue for &str {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T: AttributeValue> AttributeValue for Option<T> {
    fn is_empty_value(&self) -> bool {
        match self {
            Some(inner) => inner.is_empty_value(),
            None => true,
        }
    }
}

impl AttributeValue for serde_json::Value {
    fn is_empty_value(&self) -> bool {
        match self {
            serde_json::Value::Null => true,
            serde_json::Value::String(s) => s.is_empty(),
            _ => false,
        }
    }
}

impl<T> AttributeValue for Vec<T> {
    fn is_empty_value(&self) -> bool {
        false
    }
}

macro_rules! never_empty {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AttributeValue for $ty {
                fn is_empty_value(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_empty!(bool, i32, i64, u32, u64, f32, f64);
