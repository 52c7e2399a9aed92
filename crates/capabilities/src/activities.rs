use portico_primitives::{ActivityKind, CollectiveKind};
use rustc_hash::FxHashSet;

/// Activities raised only by a standalone collective's own ledger.
const COLLECTIVE_ONLY: [ActivityKind; 12] = [
	ActivityKind::CollectiveCommentCreated,
	ActivityKind::CollectiveExpenseCreated,
	ActivityKind::CollectiveExpenseDeleted,
	ActivityKind::CollectiveExpenseUpdated,
	ActivityKind::CollectiveExpenseRejected,
	ActivityKind::CollectiveExpenseApproved,
	ActivityKind::CollectiveExpensePaid,
	ActivityKind::CollectiveMonthly,
	ActivityKind::CollectiveTransactionCreated,
	ActivityKind::CollectiveTransactionPaid,
	ActivityKind::CollectiveUpdateCreated,
	ActivityKind::CollectiveUpdatePublished,
];

/// Activities raised when an organization spawns collectives or users.
const ORGANIZATION_ONLY: [ActivityKind; 2] = [
	ActivityKind::OrganizationCollectiveCreated,
	ActivityKind::UserCreated,
];

const EVENT_ONLY: [ActivityKind; 1] = [ActivityKind::TicketConfirmed];

/// Activities raised by the hosting lifecycle.
const HOST_ONLY: [ActivityKind; 3] = [
	ActivityKind::CollectiveApply,
	ActivityKind::CollectiveApproved,
	ActivityKind::CollectiveCreated,
];

/// Activity filters a webhook on this collective may subscribe to.
///
/// Always an order-preserving subsequence of [`ActivityKind::CATALOG`].
/// [`ActivityKind::All`] and the membership event belong to no exclusion
/// group and survive every combination of attributes.
pub fn webhook_activities(kind: CollectiveKind, is_host: bool) -> Vec<ActivityKind> {
	let mut excluded: FxHashSet<ActivityKind> = FxHashSet::default();
	if kind != CollectiveKind::Collective {
		excluded.extend(COLLECTIVE_ONLY);
	}
	if kind != CollectiveKind::Organization {
		excluded.extend(ORGANIZATION_ONLY);
	}
	if kind != CollectiveKind::Event {
		excluded.extend(EVENT_ONLY);
	}
	if !is_host {
		excluded.extend(HOST_ONLY);
	}
	ActivityKind::CATALOG
		.into_iter()
		.filter(|activity| !excluded.contains(activity))
		.collect()
}
