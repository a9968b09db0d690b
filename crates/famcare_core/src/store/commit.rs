//! Draft-to-record commit.

use crate::model::record::Record;
use crate::notify::{Notification, NotificationSink, ERROR_TITLE, SUCCESS_TITLE};
use crate::store::draft::{Draft, ValidationError};
use crate::store::entity_store::EntityStore;
use log::{info, warn};

/// Validates `draft`, appends the derived record and resets the draft.
///
/// # Contract
/// - On success: exactly one record is appended, `draft` is cleared and an
///   info notification is emitted.
/// - On failure: `store` and `draft` are unchanged and a destructive
///   notification is emitted.
pub fn commit<D, N>(
    store: &mut EntityStore<D::Output>,
    draft: &mut D,
    notifier: &N,
) -> Result<D::Output, ValidationError>
where
    D: Draft,
    N: NotificationSink + ?Sized,
{
    let entity = <D::Output as Record>::KIND;

    if let Err(err) = draft.validate() {
        warn!(
            "event=commit module=store status=error entity={} missing={} malformed={}",
            entity.as_str(),
            err.missing.join("|"),
            err.malformed.join("|")
        );
        notifier.notify(Notification::destructive(ERROR_TITLE, err.user_message()));
        return Err(err);
    }

    let message = draft.success_message();
    let record = store.insert_with(|id| draft.build(id)).clone();
    draft.reset();

    info!(
        "event=commit module=store status=ok entity={} id={} store_len={}",
        entity.as_str(),
        record.id(),
        store.len()
    );
    notifier.notify(Notification::info(SUCCESS_TITLE, message));
    Ok(record)
}
