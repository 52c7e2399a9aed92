use std::fmt;

use serde::{Deserialize, Serialize};

/// A notification activity a webhook can subscribe to.
///
/// Declaration order is the canonical catalog order used for display;
/// filtered catalogs preserve it. [`ActivityKind::All`] subscribes to every
/// activity and is the default for newly added webhooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ActivityKind {
	#[default]
	#[serde(rename = "all")]
	All,
	#[serde(rename = "collective.apply")]
	CollectiveApply,
	#[serde(rename = "collective.approved")]
	CollectiveApproved,
	#[serde(rename = "collective.comment.created")]
	CollectiveCommentCreated,
	#[serde(rename = "collective.created")]
	CollectiveCreated,
	#[serde(rename = "collective.expense.created")]
	CollectiveExpenseCreated,
	#[serde(rename = "collective.expense.deleted")]
	CollectiveExpenseDeleted,
	#[serde(rename = "collective.expense.updated")]
	CollectiveExpenseUpdated,
	#[serde(rename = "collective.expense.rejected")]
	CollectiveExpenseRejected,
	#[serde(rename = "collective.expense.approved")]
	CollectiveExpenseApproved,
	#[serde(rename = "collective.expense.paid")]
	CollectiveExpensePaid,
	#[serde(rename = "collective.member.created")]
	CollectiveMemberCreated,
	#[serde(rename = "collective.monthly")]
	CollectiveMonthly,
	#[serde(rename = "collective.transaction.created")]
	CollectiveTransactionCreated,
	#[serde(rename = "collective.transaction.paid")]
	CollectiveTransactionPaid,
	#[serde(rename = "collective.update.created")]
	CollectiveUpdateCreated,
	#[serde(rename = "collective.update.published")]
	CollectiveUpdatePublished,
	#[serde(rename = "organization.collective.created")]
	OrganizationCollectiveCreated,
	#[serde(rename = "user.created")]
	UserCreated,
	#[serde(rename = "ticket.confirmed")]
	TicketConfirmed,
}

impl ActivityKind {
	/// Master catalog, in canonical display order.
	pub const CATALOG: [ActivityKind; 20] = [
		ActivityKind::All,
		ActivityKind::CollectiveApply,
		ActivityKind::CollectiveApproved,
		ActivityKind::CollectiveCommentCreated,
		ActivityKind::CollectiveCreated,
		ActivityKind::CollectiveExpenseCreated,
		ActivityKind::CollectiveExpenseDeleted,
		ActivityKind::CollectiveExpenseUpdated,
		ActivityKind::CollectiveExpenseRejected,
		ActivityKind::CollectiveExpenseApproved,
		ActivityKind::CollectiveExpensePaid,
		ActivityKind::CollectiveMemberCreated,
		ActivityKind::CollectiveMonthly,
		ActivityKind::CollectiveTransactionCreated,
		ActivityKind::CollectiveTransactionPaid,
		ActivityKind::CollectiveUpdateCreated,
		ActivityKind::CollectiveUpdatePublished,
		ActivityKind::OrganizationCollectiveCreated,
		ActivityKind::UserCreated,
		ActivityKind::TicketConfirmed,
	];

	/// Dotted platform wire id.
	pub const fn wire_name(self) -> &'static str {
		match self {
			ActivityKind::All => "all",
			ActivityKind::CollectiveApply => "collective.apply",
			ActivityKind::CollectiveApproved => "collective.approved",
			ActivityKind::CollectiveCommentCreated => "collective.comment.created",
			ActivityKind::CollectiveCreated => "collective.created",
			ActivityKind::CollectiveExpenseCreated => "collective.expense.created",
			ActivityKind::CollectiveExpenseDeleted => "collective.expense.deleted",
			ActivityKind::CollectiveExpenseUpdated => "collective.expense.updated",
			ActivityKind::CollectiveExpenseRejected => "collective.expense.rejected",
			ActivityKind::CollectiveExpenseApproved => "collective.expense.approved",
			ActivityKind::CollectiveExpensePaid => "collective.expense.paid",
			ActivityKind::CollectiveMemberCreated => "collective.member.created",
			ActivityKind::CollectiveMonthly => "collective.monthly",
			ActivityKind::CollectiveTransactionCreated => "collective.transaction.created",
			ActivityKind::CollectiveTransactionPaid => "collective.transaction.paid",
			ActivityKind::CollectiveUpdateCreated => "collective.update.created",
			ActivityKind::CollectiveUpdatePublished => "collective.update.published",
			ActivityKind::OrganizationCollectiveCreated => "organization.collective.created",
			ActivityKind::UserCreated => "user.created",
			ActivityKind::TicketConfirmed => "ticket.confirmed",
		}
	}
}

impl fmt::Display for ActivityKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.wire_name())
	}
}
