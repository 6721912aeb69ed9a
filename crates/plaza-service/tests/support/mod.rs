//! In-memory test doubles for the service layer
//!
//! Implements every repository port plus the event publisher against plain
//! hash maps, so the aggregation, tree-assembly, projection, and fan-out
//! logic can be exercised without PostgreSQL or Redis.

// Not every test binary touches every helper
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use plaza_core::entities::{Comment, Post, Reaction, ReactionType, Tag, User};
use plaza_core::error::DomainError;
use plaza_core::traits::{
    CommentRepository, EventPublisher, PostQuery, PostRepository, ReactionRepository,
    ReactionTypeRepository, RepoResult, TagRepository, UserRepository,
};
use plaza_core::value_objects::{Snowflake, TargetKind};
use plaza_core::SnowflakeGenerator;
use plaza_service::services::{ServiceContext, ServiceContextBuilder};

type ReactionKey = (Snowflake, Snowflake, TargetKind);

/// Shared backing store for all in-memory repositories
#[derive(Default)]
pub struct MemoryStore {
    pub users: Mutex<HashMap<Snowflake, User>>,
    pub posts: Mutex<HashMap<Snowflake, Post>>,
    pub comments: Mutex<HashMap<Snowflake, Comment>>,
    pub tags: Mutex<HashMap<Snowflake, Tag>>,
    pub post_tags: Mutex<HashSet<(Snowflake, Snowflake)>>,
    pub reaction_types: Mutex<HashMap<Snowflake, ReactionType>>,
    pub reactions: Mutex<HashMap<ReactionKey, Reaction>>,
}

fn sort_by_creation(posts: &mut [Post]) {
    posts.sort_by_key(|p| (p.created_at, p.id));
}

// ============================================================================
// Repositories
// ============================================================================

pub struct MemoryUserRepository(pub Arc<MemoryStore>);

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        Ok(self.0.users.lock().get(&id).cloned())
    }

    async fn exists(&self, id: Snowflake) -> RepoResult<bool> {
        Ok(self.0.users.lock().contains_key(&id))
    }

    async fn create(&self, user: &User) -> RepoResult<()> {
        self.0.users.lock().insert(user.id, user.clone());
        Ok(())
    }
}

pub struct MemoryPostRepository(pub Arc<MemoryStore>);

#[async_trait]
impl PostRepository for MemoryPostRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>> {
        Ok(self.0.posts.lock().get(&id).cloned())
    }

    async fn exists(&self, id: Snowflake) -> RepoResult<bool> {
        Ok(self.0.posts.lock().contains_key(&id))
    }

    async fn list(&self, query: PostQuery) -> RepoResult<Vec<Post>> {
        let mut posts: Vec<Post> = self.0.posts.lock().values().cloned().collect();
        sort_by_creation(&mut posts);
        Ok(posts
            .into_iter()
            .skip(query.offset.max(0) as usize)
            .take(query.limit.clamp(1, 100) as usize)
            .collect())
    }

    async fn find_by_author(&self, author_id: Snowflake) -> RepoResult<Vec<Post>> {
        let mut posts: Vec<Post> = self
            .0
            .posts
            .lock()
            .values()
            .filter(|p| p.author_id == author_id)
            .cloned()
            .collect();
        sort_by_creation(&mut posts);
        Ok(posts)
    }

    async fn find_by_tag(&self, tag_name: &str) -> RepoResult<Vec<Post>> {
        let tag_id = self
            .0
            .tags
            .lock()
            .values()
            .find(|t| t.name == tag_name)
            .map(|t| t.id);
        let Some(tag_id) = tag_id else {
            return Ok(vec![]);
        };

        let assoc = self.0.post_tags.lock();
        let mut posts: Vec<Post> = self
            .0
            .posts
            .lock()
            .values()
            .filter(|p| assoc.contains(&(p.id, tag_id)))
            .cloned()
            .collect();
        sort_by_creation(&mut posts);
        Ok(posts)
    }

    async fn create(&self, post: &Post) -> RepoResult<()> {
        self.0.posts.lock().insert(post.id, post.clone());
        Ok(())
    }

    async fn update(&self, post: &Post) -> RepoResult<()> {
        self.0.posts.lock().insert(post.id, post.clone());
        Ok(())
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        self.0.posts.lock().remove(&id);
        // Owned comments cascade, like the foreign keys do in PostgreSQL
        self.0.comments.lock().retain(|_, c| c.post_id != id);
        self.0.post_tags.lock().retain(|(post_id, _)| *post_id != id);
        Ok(())
    }
}

pub struct MemoryCommentRepository(pub Arc<MemoryStore>);

#[async_trait]
impl CommentRepository for MemoryCommentRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>> {
        Ok(self.0.comments.lock().get(&id).cloned())
    }

    async fn find_by_post(&self, post_id: Snowflake) -> RepoResult<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .0
            .comments
            .lock()
            .values()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();
        comments.sort_by_key(|c| (c.created_at, c.id));
        Ok(comments)
    }

    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        self.0.comments.lock().insert(comment.id, comment.clone());
        Ok(())
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<Vec<Snowflake>> {
        let mut comments = self.0.comments.lock();
        if !comments.contains_key(&id) {
            return Ok(vec![]);
        }

        // Collect the subtree like the recursive CTE does; the visited set
        // keeps corrupt parent links from looping.
        let mut removed: HashSet<Snowflake> = HashSet::from([id]);
        loop {
            let next: Vec<Snowflake> = comments
                .values()
                .filter(|c| {
                    c.parent_id.is_some_and(|p| removed.contains(&p)) && !removed.contains(&c.id)
                })
                .map(|c| c.id)
                .collect();
            if next.is_empty() {
                break;
            }
            removed.extend(next);
        }

        comments.retain(|comment_id, _| !removed.contains(comment_id));
        Ok(removed.into_iter().collect())
    }
}

pub struct MemoryTagRepository(pub Arc<MemoryStore>);

#[async_trait]
impl TagRepository for MemoryTagRepository {
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Tag>> {
        Ok(self
            .0
            .tags
            .lock()
            .values()
            .find(|t| t.name == name)
            .cloned())
    }

    async fn list(&self) -> RepoResult<Vec<Tag>> {
        let mut tags: Vec<Tag> = self.0.tags.lock().values().cloned().collect();
        tags.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tags)
    }

    async fn create(&self, tag: &Tag) -> RepoResult<()> {
        let mut tags = self.0.tags.lock();
        if tags.values().any(|t| t.name == tag.name) {
            return Err(DomainError::TagAlreadyExists(tag.name.clone()));
        }
        tags.insert(tag.id, tag.clone());
        Ok(())
    }

    async fn names_for_post(&self, post_id: Snowflake) -> RepoResult<Vec<String>> {
        let tags = self.0.tags.lock();
        let mut names: Vec<String> = self
            .0
            .post_tags
            .lock()
            .iter()
            .filter(|(p, _)| *p == post_id)
            .filter_map(|(_, tag_id)| tags.get(tag_id).map(|t| t.name.clone()))
            .collect();
        names.sort();
        Ok(names)
    }

    async fn attach_to_post(&self, post_id: Snowflake, tag_id: Snowflake) -> RepoResult<()> {
        self.0.post_tags.lock().insert((post_id, tag_id));
        Ok(())
    }

    async fn detach_from_post(&self, post_id: Snowflake, tag_id: Snowflake) -> RepoResult<()> {
        self.0.post_tags.lock().remove(&(post_id, tag_id));
        Ok(())
    }

    async fn clear_post_tags(&self, post_id: Snowflake) -> RepoResult<()> {
        self.0.post_tags.lock().retain(|(p, _)| *p != post_id);
        Ok(())
    }
}

pub struct MemoryReactionTypeRepository(pub Arc<MemoryStore>);

#[async_trait]
impl ReactionTypeRepository for MemoryReactionTypeRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<ReactionType>> {
        Ok(self.0.reaction_types.lock().get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> RepoResult<Option<ReactionType>> {
        Ok(self
            .0
            .reaction_types
            .lock()
            .values()
            .find(|t| t.name == name)
            .cloned())
    }

    async fn list(&self) -> RepoResult<Vec<ReactionType>> {
        let mut types: Vec<ReactionType> =
            self.0.reaction_types.lock().values().cloned().collect();
        types.sort_by_key(|t| t.id);
        Ok(types)
    }

    async fn create(&self, reaction_type: &ReactionType) -> RepoResult<()> {
        let mut types = self.0.reaction_types.lock();
        if !types.values().any(|t| t.name == reaction_type.name) {
            types.insert(reaction_type.id, reaction_type.clone());
        }
        Ok(())
    }
}

pub struct MemoryReactionRepository(pub Arc<MemoryStore>);

#[async_trait]
impl ReactionRepository for MemoryReactionRepository {
    async fn create(&self, reaction: &Reaction) -> RepoResult<()> {
        let key = (reaction.user_id, reaction.target_id, reaction.target_kind);
        let mut reactions = self.0.reactions.lock();
        if reactions.contains_key(&key) {
            return Err(DomainError::DuplicateReaction {
                user_id: reaction.user_id,
                target_id: reaction.target_id,
                target_kind: reaction.target_kind,
            });
        }
        reactions.insert(key, reaction.clone());
        Ok(())
    }

    async fn update_type(&self, reaction: &Reaction) -> RepoResult<bool> {
        let key = (reaction.user_id, reaction.target_id, reaction.target_kind);
        let mut reactions = self.0.reactions.lock();
        match reactions.get_mut(&key) {
            Some(existing) => {
                existing.reaction_type_id = reaction.reaction_type_id;
                existing.reacted_at = reaction.reacted_at;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(
        &self,
        user_id: Snowflake,
        target_id: Snowflake,
        target_kind: TargetKind,
    ) -> RepoResult<bool> {
        Ok(self
            .0
            .reactions
            .lock()
            .remove(&(user_id, target_id, target_kind))
            .is_some())
    }

    async fn delete_for_targets(
        &self,
        target_ids: &[Snowflake],
        target_kind: TargetKind,
    ) -> RepoResult<u64> {
        let mut reactions = self.0.reactions.lock();
        let before = reactions.len();
        reactions.retain(|(_, target, kind), _| {
            *kind != target_kind || !target_ids.contains(target)
        });
        Ok((before - reactions.len()) as u64)
    }

    async fn count_by_type(
        &self,
        target_id: Snowflake,
        target_kind: TargetKind,
    ) -> RepoResult<Vec<(String, i64)>> {
        let types = self.0.reaction_types.lock();
        let mut counts: HashMap<String, i64> = HashMap::new();
        for reaction in self.0.reactions.lock().values() {
            if reaction.is_for(target_id, target_kind) {
                if let Some(reaction_type) = types.get(&reaction.reaction_type_id) {
                    *counts.entry(reaction_type.name.clone()).or_insert(0) += 1;
                }
            }
        }
        let mut counts: Vec<(String, i64)> = counts.into_iter().collect();
        counts.sort();
        Ok(counts)
    }

    async fn viewer_reaction_type(
        &self,
        user_id: Snowflake,
        target_id: Snowflake,
        target_kind: TargetKind,
    ) -> RepoResult<Option<String>> {
        let types = self.0.reaction_types.lock();
        Ok(self
            .0
            .reactions
            .lock()
            .get(&(user_id, target_id, target_kind))
            .and_then(|r| types.get(&r.reaction_type_id))
            .map(|t| t.name.clone()))
    }
}

// ============================================================================
// Publishers
// ============================================================================

/// Records every published event for assertions
#[derive(Default)]
pub struct RecordingPublisher {
    pub events: Mutex<Vec<(String, serde_json::Value)>>,
}

#[async_trait]
impl EventPublisher for RecordingPublisher {
    async fn publish(&self, topic: &str, payload: serde_json::Value) -> Result<(), DomainError> {
        self.events.lock().push((topic.to_string(), payload));
        Ok(())
    }
}

impl RecordingPublisher {
    /// Events published on one topic, in publish order
    pub fn on_topic(&self, topic: &str) -> Vec<serde_json::Value> {
        self.events
            .lock()
            .iter()
            .filter(|(t, _)| t == topic)
            .map(|(_, payload)| payload.clone())
            .collect()
    }

    /// The most recent event on one topic
    pub fn last_on(&self, topic: &str) -> Option<serde_json::Value> {
        self.on_topic(topic).pop()
    }
}

/// Fails every publish; mutations must still succeed
pub struct FailingPublisher;

#[async_trait]
impl EventPublisher for FailingPublisher {
    async fn publish(&self, _topic: &str, _payload: serde_json::Value) -> Result<(), DomainError> {
        Err(DomainError::PublishError("broadcast channel down".to_string()))
    }
}

// ============================================================================
// Test application
// ============================================================================

/// Fully wired service context over the in-memory store
pub struct TestApp {
    pub store: Arc<MemoryStore>,
    pub publisher: Arc<RecordingPublisher>,
    pub ctx: ServiceContext,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::default());
        let publisher = Arc::new(RecordingPublisher::default());
        let ctx = build_context(&store, publisher.clone());
        Self {
            store,
            publisher,
            ctx,
        }
    }

    /// A context whose publisher always fails, over the same store
    pub fn with_failing_publisher(&self) -> ServiceContext {
        build_context(&self.store, Arc::new(FailingPublisher))
    }

    pub fn seed_user(&self, name: &str) -> Snowflake {
        let user = User::new(
            self.ctx.generate_id(),
            format!("{name}@example.com"),
            name.to_string(),
            "USER".to_string(),
        );
        let id = user.id;
        self.store.users.lock().insert(id, user);
        id
    }

    pub fn seed_reaction_type(&self, name: &str) -> Snowflake {
        let reaction_type = ReactionType::new(self.ctx.generate_id(), name.to_string());
        let id = reaction_type.id;
        self.store.reaction_types.lock().insert(id, reaction_type);
        id
    }
}

fn build_context(
    store: &Arc<MemoryStore>,
    publisher: Arc<dyn EventPublisher>,
) -> ServiceContext {
    ServiceContextBuilder::new()
        .user_repo(Arc::new(MemoryUserRepository(store.clone())))
        .post_repo(Arc::new(MemoryPostRepository(store.clone())))
        .comment_repo(Arc::new(MemoryCommentRepository(store.clone())))
        .tag_repo(Arc::new(MemoryTagRepository(store.clone())))
        .reaction_type_repo(Arc::new(MemoryReactionTypeRepository(store.clone())))
        .reaction_repo(Arc::new(MemoryReactionRepository(store.clone())))
        .publisher(publisher)
        .snowflake_generator(Arc::new(SnowflakeGenerator::new(0)))
        .build()
        .expect("test context wiring")
}
