//! Namespaced station identifiers.

use std::fmt;

use serde::Serialize;

use crate::operators::Operator;

/// Object type segment shared by every remapped station id.
const OBJECT_TYPE: &str = "VehicleSharingParkingArea";

/// A station identifier in the form `<code>:VehicleSharingParkingArea:<native id>`.
///
/// The only way to build one is from an [`Operator`] and the upstream id, so
/// a normalized record can never carry a raw upstream id, and an id that is
/// already namespaced cannot be namespaced a second time.
///
/// # Examples
///
/// ```
/// use bike_server::operators::Operator;
///
/// let id = Operator::Kolumbus.station_id("66");
/// assert_eq!(id.as_str(), "YKO:VehicleSharingParkingArea:66");
/// assert_eq!(id.native_id(), "66");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StationId(String);

impl StationId {
    pub(crate) fn new(operator: Operator, native_id: &str) -> Self {
        StationId(format!("{}:{OBJECT_TYPE}:{native_id}", operator.namespace()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The operator namespace code (the first segment).
    pub fn namespace(&self) -> &str {
        self.0.split(':').next().unwrap_or_default()
    }

    /// The upstream id this identifier was built from.
    pub fn native_id(&self) -> &str {
        let prefix_len = self.namespace().len() + OBJECT_TYPE.len() + 2;
        &self.0[prefix_len..]
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_operator() -> impl Strategy<Value = Operator> {
        proptest::sample::select(Operator::ALL.to_vec())
    }

    proptest! {
        /// Every id matches `<code>:VehicleSharingParkingArea:<id>` for its operator.
        #[test]
        fn matches_namespaced_pattern(op in any_operator(), native in "[A-Za-z0-9_-]{1,12}") {
            let id = op.station_id(&native);
            let expected = format!("{}:VehicleSharingParkingArea:{}", op.namespace(), native);
            prop_assert_eq!(id.as_str(), expected.as_str());
            prop_assert_eq!(id.namespace(), op.namespace());
            prop_assert_eq!(id.native_id(), native.as_str());
        }

        /// Distinct operators never produce colliding ids for the same native id.
        #[test]
        fn operators_do_not_collide(a in any_operator(), b in any_operator(), native in "[0-9]{1,6}") {
            prop_assume!(a != b);
            prop_assert_ne!(a.station_id(&native), b.station_id(&native));
        }
    }
}
