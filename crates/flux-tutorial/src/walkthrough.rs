//! The dispatch walkthrough
//!
//! Part one builds `store_0` from a user and an items reducer and dispatches a
//! few actions, printing the state after each one. Part two normalizes a blog
//! post and feeds it into `store_1` through the blog action creators.

use crate::actions::{
    add_item, an_action, load_entities, set_author_name, set_comment, set_content, set_name,
    set_title,
};
use crate::blog_post::{self, ARTICLES};
use crate::reducers::{
    author_reducer::author_reducer, comments_reducer::comments_reducer,
    content_reducer::content_reducer, entities_reducer::entities_reducer,
    items_reducer::items_reducer, title_reducer::title_reducer, user_reducer::user_reducer,
};
use anyhow::{Context, Result};
use flux_normalize::{normalize, Normalized, Shape};
use flux_store::{combine_reducers, Action, CombinedReducer, CombinedState, Store};
use serde_json::Value;
use std::cell::Cell;
use std::io::Write;
use std::rc::Rc;

pub type TutorialStore = Store<CombinedState, CombinedReducer>;

/// `user` and `items` slices
pub fn tutorial_reducer() -> CombinedReducer {
    combine_reducers! {
        user: user_reducer(),
        items: items_reducer(),
    }
}

/// The blog post slices plus the normalized entity tables
pub fn blog_reducer() -> CombinedReducer {
    combine_reducers! {
        author: author_reducer(),
        title: title_reducer(),
        content: content_reducer(),
        comments: comments_reducer(),
        entities: entities_reducer(),
    }
}

/// Run both parts of the walkthrough
pub fn run(out: &mut impl Write, blog_post: &Value) -> Result<()> {
    writeln!(out, "\n ### It starts here")?;
    dispatch_actions(out)?;

    writeln!(out)?;
    let normalized = normalize_blog_post(out, blog_post)?;

    writeln!(out)?;
    build_blog_store(out, &normalized)?;
    Ok(())
}

/// Create `store_0` and dispatch the actions of the first part
pub fn dispatch_actions(out: &mut impl Write) -> Result<TutorialStore> {
    let store = Store::create(tutorial_reducer(), None).context("Failed to create store_0")?;
    writeln!(
        out,
        "store_0 state after initialization: {}",
        store.get_state()
    )?;

    let notifications = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&notifications);
    let subscription = store.subscribe(move || {
        counter.set(counter.get() + 1);
        log::info!("store_0 notified its subscriber ({})", counter.get());
    });

    let actions = [an_action(), set_name("bob"), add_item("milk"), add_item("eggs")];
    for action in actions {
        step(out, &store, "store_0", action)?;
    }

    subscription.unsubscribe();
    writeln!(
        out,
        "store_0 notified its subscriber {} times",
        notifications.get()
    )?;

    Ok(store)
}

/// Normalize the blog post and print the entity tables
pub fn normalize_blog_post(out: &mut impl Write, data: &Value) -> Result<Normalized> {
    let normalized = normalize(data, &blog_post::schema(), &Shape::one(ARTICLES))
        .context("Failed to normalize blog post")?;
    writeln!(
        out,
        "application data after a call to normalize {}",
        serde_json::to_string_pretty(&normalized)?
    )?;
    Ok(normalized)
}

/// Create `store_1` and fill it from the normalized blog post
pub fn build_blog_store(out: &mut impl Write, normalized: &Normalized) -> Result<TutorialStore> {
    let article = blog_post::article(normalized)?;

    let store = Store::create(blog_reducer(), None).context("Failed to create store_1")?;
    writeln!(
        out,
        "store_1 state after initialization: {}",
        store.get_state()
    )?;

    step(out, &store, "store_1", load_entities(normalized))?;
    step(out, &store, "store_1", set_author_name(&article.author))?;
    step(out, &store, "store_1", set_title(article.title.as_str()))?;
    step(out, &store, "store_1", set_content(article.content.as_str()))?;
    for comment in &article.comments {
        step(out, &store, "store_1", set_comment(comment))?;
    }

    Ok(store)
}

fn step(out: &mut impl Write, store: &TutorialStore, name: &str, action: Action) -> Result<()> {
    let action = store
        .dispatch(action)
        .with_context(|| format!("{} failed to dispatch", name))?;
    writeln!(
        out,
        "{} state after action {}: {}",
        name,
        action.label(),
        store.get_state()
    )?;
    Ok(())
}
