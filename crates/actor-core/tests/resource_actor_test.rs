use actor_core::{ActorClient, ActorEntity, FrameworkError, ResourceActor, ResourceClient};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

// --- Test entity keyed by a natural value ---

#[derive(Clone, Debug, PartialEq)]
struct Member {
    handle: String,
    banned: bool,
}

#[derive(Debug)]
struct MemberCreate {
    handle: String,
}

#[derive(Debug)]
enum MemberAction {
    Ban,
}

#[derive(Debug, thiserror::Error)]
enum MemberError {
    #[error("handle must not be empty")]
    EmptyHandle,
    #[error("banned members cannot leave")]
    Banned,
}

/// Counts delete hooks so tests can see that they ran.
#[derive(Clone, Default)]
struct Audit {
    deletes: Arc<AtomicUsize>,
}

#[async_trait]
impl ActorEntity for Member {
    type Id = String;
    type Create = MemberCreate;
    type Action = MemberAction;
    type ActionResult = bool;
    type Context = Audit;
    type Error = MemberError;

    fn assign_id(_seq: u32, params: &MemberCreate) -> String {
        params.handle.clone()
    }

    fn from_create_params(id: String, _params: MemberCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            handle: id,
            banned: false,
        })
    }

    async fn on_create(&mut self, _ctx: &Audit) -> Result<(), Self::Error> {
        if self.handle.is_empty() {
            return Err(MemberError::EmptyHandle);
        }
        Ok(())
    }

    async fn on_delete(&self, ctx: &Audit) -> Result<(), Self::Error> {
        if self.banned {
            return Err(MemberError::Banned);
        }
        ctx.deletes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn handle_action(&mut self, action: MemberAction, _ctx: &Audit) -> Result<bool, Self::Error> {
        match action {
            MemberAction::Ban => {
                let changed = !self.banned;
                self.banned = true;
                Ok(changed)
            }
        }
    }
}

struct MemberClient {
    inner: ResourceClient<Member>,
}

#[async_trait]
impl ActorClient<Member> for MemberClient {
    type Error = String;

    fn inner(&self) -> &ResourceClient<Member> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> String {
        e.to_string()
    }
}

fn spawn_members() -> (ResourceClient<Member>, Audit, tokio::task::JoinHandle<()>) {
    let audit = Audit::default();
    let (actor, client) = ResourceActor::<Member>::new(8);
    let handle = tokio::spawn(actor.run(audit.clone()));
    (client, audit, handle)
}

#[tokio::test]
async fn test_natural_keys_reject_duplicates() {
    let (client, _audit, _handle) = spawn_members();

    let id = client
        .create(MemberCreate { handle: "alice".into() })
        .await
        .unwrap();
    assert_eq!(id, "alice");

    let again = client.create(MemberCreate { handle: "alice".into() }).await;
    assert!(matches!(again, Err(FrameworkError::AlreadyExists(h)) if h == "alice"));
    assert_eq!(client.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_on_create_failure_is_not_stored() {
    let (client, _audit, _handle) = spawn_members();

    let result = client.create(MemberCreate { handle: String::new() }).await;
    assert!(matches!(result, Err(FrameworkError::EntityError(_))));
    assert!(client.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_is_key_ordered() {
    let (client, _audit, _handle) = spawn_members();

    for handle in ["carol", "alice", "bob"] {
        client
            .create(MemberCreate { handle: handle.into() })
            .await
            .unwrap();
    }

    let handles: Vec<String> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.handle)
        .collect();
    assert_eq!(handles, ["alice", "bob", "carol"]);
}

#[tokio::test]
async fn test_actions_and_delete_hooks() {
    let (client, audit, _handle) = spawn_members();
    client.create(MemberCreate { handle: "dave".into() }).await.unwrap();
    client.create(MemberCreate { handle: "erin".into() }).await.unwrap();

    assert!(client.perform_action("dave".into(), MemberAction::Ban).await.unwrap());
    assert!(!client.perform_action("dave".into(), MemberAction::Ban).await.unwrap());

    // on_delete vetoes removal of a banned member
    assert!(matches!(
        client.delete("dave".into()).await,
        Err(FrameworkError::EntityError(_))
    ));
    assert!(client.get("dave".into()).await.unwrap().is_some());

    client.delete("erin".into()).await.unwrap();
    assert_eq!(audit.deletes.load(Ordering::SeqCst), 1);
    assert!(matches!(
        client.delete("erin".into()).await,
        Err(FrameworkError::NotFound(_))
    ));
    assert!(matches!(
        client.perform_action("zoe".into(), MemberAction::Ban).await,
        Err(FrameworkError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_actor_client_defaults_and_shutdown() {
    let (client, _audit, handle) = spawn_members();
    let members = MemberClient { inner: client };

    members
        .inner()
        .create(MemberCreate { handle: "frank".into() })
        .await
        .unwrap();
    assert!(members.get("frank".into()).await.unwrap().is_some());
    assert_eq!(members.list().await.unwrap().len(), 1);

    let missing = members.delete("nobody".into()).await;
    assert_eq!(missing, Err("No entity with id nobody".to_string()));

    // Dropping the last client ends the actor loop.
    drop(members);
    handle.await.unwrap();
}
