//! Selection and aggregation over owned objects of the object-based chain.
//!
//! Objects are matched on their full type string, compared without regard
//! to ASCII case. "Nothing matched" is a normal outcome: [`select_latest`]
//! returns `None` and [`aggregate_balances`] returns zero.
use async_trait::async_trait;

use crate::models::{AmountValue, BridgeError, ChainObjectRef, ParseError};

#[cfg(test)]
use mockall::automock;

/// Resolves the balance held by a single coin object.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BalanceLookup: Send + Sync {
    async fn balance_of(&self, object: &ChainObjectRef) -> Result<AmountValue, BridgeError>;
}

/// Objects whose type equals `type_tag`, in their original order.
pub fn matching<'a, 'b>(
    objects: &'a [ChainObjectRef],
    type_tag: &'b str,
) -> impl Iterator<Item = &'a ChainObjectRef> + 'b
where
    'a: 'b,
{
    objects.iter().filter(move |obj| obj.is_type(type_tag))
}

/// The matching object with the highest version.
///
/// Equal versions keep the object seen first, so the result never depends
/// on anything but the input order.
pub fn select_latest<'a>(
    objects: &'a [ChainObjectRef],
    type_tag: &str,
) -> Option<&'a ChainObjectRef> {
    let mut latest: Option<&ChainObjectRef> = None;
    for candidate in matching(objects, type_tag) {
        match latest {
            Some(current) if candidate.version <= current.version => {}
            _ => latest = Some(candidate),
        }
    }
    latest
}

/// Sums the balance of every matching object, one lookup at a time.
pub async fn aggregate_balances<L>(
    objects: &[ChainObjectRef],
    type_tag: &str,
    lookup: &L,
) -> Result<AmountValue, BridgeError>
where
    L: BalanceLookup + ?Sized,
{
    let mut total = AmountValue::ZERO;
    for object in matching(objects, type_tag) {
        let balance = lookup.balance_of(object).await?;
        total = total.checked_add(balance).ok_or_else(|| ParseError::Overflow {
            value: format!("sum of {type_tag} balances"),
            limit: "256 bits",
        })?;
    }
    Ok(total)
}
