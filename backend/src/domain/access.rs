//! Ownership-scoped access policy.
//!
//! [`decide`] is the single place that answers "may this principal perform
//! this operation on this kind of resource owned by that user". It never sees
//! HTTP requests or storage; services load the resource, pass its owner in,
//! and translate the [`Decision`] into an [`Outcome`].
//!
//! Rules, in order:
//! 1. Anonymous principals are sent to login for any operation that needs
//!    authentication (everything on notes; create/update/delete on comments).
//! 2. Listing notes is scoped to the principal's own notes. News and comments
//!    are public.
//! 3. Owner-scoped operations (update, delete, and reading a note) by anyone
//!    but the owner are concealed: the resource is reported as missing.
//! 4. Everything else is allowed.

use tracing::debug;

use super::{Outcome, UserId};

/// Who is making the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Principal {
    Anonymous,
    User(UserId),
}

impl Principal {
    /// Authenticated user id, if any.
    pub fn user_id(&self) -> Option<&UserId> {
        match self {
            Self::Anonymous => None,
            Self::User(id) => Some(id),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::User(_))
    }
}

/// Requested operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Read,
    Create,
    Update,
    Delete,
}

/// Kind of resource the operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    News,
    Comment,
    Note,
}

impl ResourceKind {
    fn requires_login(self, operation: Operation) -> bool {
        match (self, operation) {
            (Self::News | Self::Comment, Operation::List | Operation::Read) => false,
            _ => true,
        }
    }

    fn owner_only(self, operation: Operation) -> bool {
        matches!(
            (self, operation),
            (_, Operation::Update | Operation::Delete) | (Self::Note, Operation::Read)
        )
    }

    fn scoped_listing(self, operation: Operation) -> bool {
        matches!((self, operation), (Self::Note, Operation::List))
    }
}

/// Policy verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Proceed. `actor` is the authenticated user, when there is one.
    Allow { actor: Option<UserId> },
    /// Proceed, restricting the listing to resources authored by `owner`.
    Scoped { owner: UserId },
    /// Authentication is required first.
    LoginRequired,
    /// Pretend the resource does not exist.
    Conceal,
}

impl Decision {
    /// Outcome that ends the request when this decision does not yield an
    /// authenticated actor.
    ///
    /// Callers match the permitted shape they need first and hand every other
    /// decision here: an anonymous `Allow` still needs a login before a user
    /// can act, and a `Scoped` verdict does not name a single resource.
    pub fn into_refusal<T>(self) -> Outcome<T> {
        match self {
            Self::Allow { actor: None } | Self::LoginRequired => Outcome::RedirectToLogin,
            Self::Allow { actor: Some(_) } | Self::Scoped { .. } | Self::Conceal => {
                Outcome::NotFound
            }
        }
    }
}

/// Decide whether `principal` may perform `operation`.
///
/// `owner` is the author of the targeted resource when a single resource is
/// addressed; for owner-only operations a missing owner conceals the resource.
///
/// # Examples
/// ```
/// use quill::domain::access::{decide, Decision, Operation, Principal, ResourceKind};
/// use quill::domain::UserId;
///
/// let author = UserId::random();
/// let reader = Principal::User(UserId::random());
///
/// let verdict = decide(&reader, Operation::Update, ResourceKind::Comment, Some(&author));
/// assert_eq!(verdict, Decision::Conceal);
///
/// let verdict = decide(&Principal::Anonymous, Operation::Read, ResourceKind::Comment, None);
/// assert_eq!(verdict, Decision::Allow { actor: None });
/// ```
pub fn decide(
    principal: &Principal,
    operation: Operation,
    kind: ResourceKind,
    owner: Option<&UserId>,
) -> Decision {
    let actor = match principal {
        Principal::Anonymous if kind.requires_login(operation) => return Decision::LoginRequired,
        Principal::Anonymous => return Decision::Allow { actor: None },
        Principal::User(id) => id,
    };

    if kind.scoped_listing(operation) {
        return Decision::Scoped {
            owner: actor.clone(),
        };
    }

    if kind.owner_only(operation) && owner != Some(actor) {
        return Decision::Conceal;
    }

    Decision::Allow {
        actor: Some(actor.clone()),
    }
}

/// Refuse anonymous callers before any lookup happens.
///
/// Used ahead of loading an owner-scoped resource, so a missing resource still
/// sends anonymous callers to login rather than revealing that it is missing.
pub fn require_login<T>(
    principal: &Principal,
    operation: Operation,
    kind: ResourceKind,
) -> Result<(), Outcome<T>> {
    match decide(principal, operation, kind, None) {
        Decision::LoginRequired => Err(Outcome::RedirectToLogin),
        _ => Ok(()),
    }
}

/// Authenticated actor permitted to act on a resource owned by `owner`, or
/// the outcome that ends the request.
pub fn permit<T>(
    principal: &Principal,
    operation: Operation,
    kind: ResourceKind,
    owner: Option<&UserId>,
) -> Result<UserId, Outcome<T>> {
    match decide(principal, operation, kind, owner) {
        Decision::Allow { actor: Some(actor) } => Ok(actor),
        Decision::Conceal => {
            debug!(?operation, ?kind, "concealing resource from non-owner");
            Err(Outcome::NotFound)
        }
        other => Err(other.into_refusal()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn author() -> UserId {
        UserId::new("11111111-1111-1111-1111-111111111111").expect("fixture id")
    }

    #[fixture]
    fn reader() -> UserId {
        UserId::new("22222222-2222-2222-2222-222222222222").expect("fixture id")
    }

    #[rstest]
    #[case(ResourceKind::Comment, Operation::Create)]
    #[case(ResourceKind::Comment, Operation::Update)]
    #[case(ResourceKind::Comment, Operation::Delete)]
    #[case(ResourceKind::Note, Operation::List)]
    #[case(ResourceKind::Note, Operation::Read)]
    #[case(ResourceKind::Note, Operation::Create)]
    #[case(ResourceKind::Note, Operation::Update)]
    #[case(ResourceKind::Note, Operation::Delete)]
    fn anonymous_is_sent_to_login(
        author: UserId,
        #[case] kind: ResourceKind,
        #[case] operation: Operation,
    ) {
        let verdict = decide(&Principal::Anonymous, operation, kind, Some(&author));
        assert_eq!(verdict, Decision::LoginRequired);
    }

    #[rstest]
    #[case(ResourceKind::News, Operation::List)]
    #[case(ResourceKind::News, Operation::Read)]
    #[case(ResourceKind::Comment, Operation::List)]
    #[case(ResourceKind::Comment, Operation::Read)]
    fn public_reads_need_no_login(#[case] kind: ResourceKind, #[case] operation: Operation) {
        let verdict = decide(&Principal::Anonymous, operation, kind, None);
        assert_eq!(verdict, Decision::Allow { actor: None });
    }

    #[rstest]
    #[case(ResourceKind::Comment, Operation::Update)]
    #[case(ResourceKind::Comment, Operation::Delete)]
    #[case(ResourceKind::Note, Operation::Read)]
    #[case(ResourceKind::Note, Operation::Update)]
    #[case(ResourceKind::Note, Operation::Delete)]
    fn non_owners_are_concealed(
        author: UserId,
        reader: UserId,
        #[case] kind: ResourceKind,
        #[case] operation: Operation,
    ) {
        let verdict = decide(&Principal::User(reader), operation, kind, Some(&author));
        assert_eq!(verdict, Decision::Conceal);
    }

    #[rstest]
    #[case(ResourceKind::Comment, Operation::Update)]
    #[case(ResourceKind::Comment, Operation::Delete)]
    #[case(ResourceKind::Note, Operation::Read)]
    #[case(ResourceKind::Note, Operation::Update)]
    #[case(ResourceKind::Note, Operation::Delete)]
    fn owners_are_allowed(author: UserId, #[case] kind: ResourceKind, #[case] operation: Operation) {
        let verdict = decide(&Principal::User(author.clone()), operation, kind, Some(&author));
        assert_eq!(
            verdict,
            Decision::Allow {
                actor: Some(author)
            }
        );
    }

    #[rstest]
    fn owner_only_operation_without_owner_is_concealed(reader: UserId) {
        let verdict = decide(&Principal::User(reader), Operation::Delete, ResourceKind::News, None);
        assert_eq!(verdict, Decision::Conceal);
    }

    #[rstest]
    fn note_listing_is_scoped_to_principal(reader: UserId) {
        let verdict = decide(
            &Principal::User(reader.clone()),
            Operation::List,
            ResourceKind::Note,
            None,
        );
        assert_eq!(verdict, Decision::Scoped { owner: reader });
    }

    #[rstest]
    fn any_user_may_create(reader: UserId) {
        for kind in [ResourceKind::Comment, ResourceKind::Note] {
            let verdict = decide(&Principal::User(reader.clone()), Operation::Create, kind, None);
            assert_eq!(
                verdict,
                Decision::Allow {
                    actor: Some(reader.clone())
                }
            );
        }
    }

    #[rstest]
    #[case(Decision::LoginRequired, Outcome::<()>::RedirectToLogin)]
    #[case(Decision::Allow { actor: None }, Outcome::<()>::RedirectToLogin)]
    #[case(Decision::Conceal, Outcome::<()>::NotFound)]
    fn refusals_map_to_outcomes(#[case] decision: Decision, #[case] expected: Outcome<()>) {
        assert_eq!(decision.into_refusal::<()>(), expected);
    }

    #[rstest]
    fn require_login_only_stops_anonymous(reader: UserId) {
        assert_eq!(
            require_login::<()>(&Principal::Anonymous, Operation::Update, ResourceKind::Comment),
            Err(Outcome::RedirectToLogin)
        );
        assert_eq!(
            require_login::<()>(&Principal::User(reader), Operation::Update, ResourceKind::Comment),
            Ok(())
        );
    }

    #[rstest]
    fn permit_yields_actor_or_refusal(author: UserId, reader: UserId) {
        let owner = Some(&author);
        assert_eq!(
            permit::<()>(&Principal::User(author.clone()), Operation::Delete, ResourceKind::Note, owner),
            Ok(author.clone())
        );
        assert_eq!(
            permit::<()>(&Principal::User(reader), Operation::Delete, ResourceKind::Note, owner),
            Err(Outcome::NotFound)
        );
        assert_eq!(
            permit::<()>(&Principal::Anonymous, Operation::Delete, ResourceKind::Note, owner),
            Err(Outcome::RedirectToLogin)
        );
    }
}
