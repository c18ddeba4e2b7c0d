use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use anyhow::anyhow;

/// Depth limit used when a configuration does not set one.
pub const DEFAULT_MAX_DEPTH: usize = 64;

type DynRender = dyn Fn(&dyn Any) -> anyhow::Result<String> + Send + Sync;

/// A caller-supplied renderer taking an untyped value.
#[derive(Clone)]
pub struct RenderFn(Arc<DynRender>);

impl RenderFn {
    pub fn new<F>(render: F) -> Self
    where
        F: Fn(&dyn Any) -> anyhow::Result<String> + Send + Sync + 'static,
    {
        Self(Arc::new(render))
    }

    /// Wraps a renderer for `T`. A value of any other type is reported as a
    /// renderer failure.
    pub fn typed<T, F>(render: F) -> Self
    where
        T: Any,
        F: Fn(&T) -> anyhow::Result<String> + Send + Sync + 'static,
    {
        Self::new(move |value: &dyn Any| {
            let value = value
                .downcast_ref::<T>()
                .ok_or_else(|| anyhow!("renderer expects a `{}`", std::any::type_name::<T>()))?;
            render(value)
        })
    }

    pub fn call(&self, value: &dyn Any) -> anyhow::Result<String> {
        (self.0)(value)
    }
}

impl std::fmt::Debug for RenderFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("RenderFn")
    }
}

/// Immutable snapshot of every exclusion and renderer override.
///
/// Each `with_*` call returns a new state. Tables are shared between states
/// until one of them is changed, so siblings derived from a common ancestor
/// never observe each other's overrides.
#[derive(Clone)]
pub struct ConfigState {
    excluded_types: Arc<HashSet<TypeId>>,
    excluded_paths: Arc<HashSet<String>>,
    type_renderers: Arc<HashMap<TypeId, RenderFn>>,
    path_renderers: Arc<HashMap<String, RenderFn>>,
    max_depth: usize,
}

impl ConfigState {
    pub fn new() -> Self {
        Self {
            excluded_types: Arc::default(),
            excluded_paths: Arc::default(),
            type_renderers: Arc::default(),
            path_renderers: Arc::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_excluded_type(&self, type_id: TypeId) -> Self {
        let mut next = self.clone();
        Arc::make_mut(&mut next.excluded_types).insert(type_id);
        next
    }

    pub fn with_excluded_path(&self, path: impl Into<String>) -> Self {
        let mut next = self.clone();
        Arc::make_mut(&mut next.excluded_paths).insert(path.into());
        next
    }

    pub fn with_type_renderer(&self, type_id: TypeId, render: RenderFn) -> Self {
        let mut next = self.clone();
        Arc::make_mut(&mut next.type_renderers).insert(type_id, render);
        next
    }

    pub fn with_path_renderer(&self, path: impl Into<String>, render: RenderFn) -> Self {
        let mut next = self.clone();
        Arc::make_mut(&mut next.path_renderers).insert(path.into(), render);
        next
    }

    pub fn with_max_depth(&self, max_depth: usize) -> Self {
        Self {
            max_depth,
            ..self.clone()
        }
    }

    pub fn is_type_excluded(&self, type_id: TypeId) -> bool {
        self.excluded_types.contains(&type_id)
    }

    pub fn is_path_excluded(&self, path: &str) -> bool {
        self.excluded_paths.contains(path)
    }

    pub fn type_renderer(&self, type_id: TypeId) -> Option<&RenderFn> {
        self.type_renderers.get(&type_id)
    }

    pub fn path_renderer(&self, path: &str) -> Option<&RenderFn> {
        self.path_renderers.get(path)
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for ConfigState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConfigState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut paths: Vec<_> = self.excluded_paths.iter().collect();
        paths.sort();
        let mut rendered_paths: Vec<_> = self.path_renderers.keys().collect();
        rendered_paths.sort();

        f.debug_struct("ConfigState")
            .field("excluded_types", &self.excluded_types.len())
            .field("excluded_paths", &paths)
            .field("type_renderers", &self.type_renderers.len())
            .field("path_renderers", &rendered_paths)
            .field("max_depth", &self.max_depth)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constant(text: &'static str) -> RenderFn {
        RenderFn::new(move |_| Ok(text.to_string()))
    }

    #[test]
    fn test_derived_states_do_not_share_overrides() {
        let base = ConfigState::new().with_excluded_path("age");
        let left = base.with_type_renderer(TypeId::of::<String>(), constant("left"));
        let right = base.with_type_renderer(TypeId::of::<String>(), constant("right"));

        assert!(base.type_renderer(TypeId::of::<String>()).is_none());
        let left_text = left.type_renderer(TypeId::of::<String>()).unwrap().call(&1);
        let right_text = right.type_renderer(TypeId::of::<String>()).unwrap().call(&1);
        assert_eq!(left_text.unwrap(), "left");
        assert_eq!(right_text.unwrap(), "right");

        assert!(left.is_path_excluded("age"));
        assert!(right.is_path_excluded("age"));
    }

    #[test]
    fn test_registering_twice_replaces() {
        let state = ConfigState::new()
            .with_path_renderer("name", constant("first"))
            .with_path_renderer("name", constant("second"));

        let text = state.path_renderer("name").unwrap().call(&()).unwrap();
        assert_eq!(text, "second");
    }

    #[test]
    fn test_typed_renderer_rejects_other_types() {
        let render = RenderFn::typed(|value: &i32| Ok(format!("<{}>", value)));

        assert_eq!(render.call(&7i32).unwrap(), "<7>");
        let err = render.call(&"seven").unwrap_err();
        assert!(err.to_string().contains("i32"));
    }

    #[test]
    fn test_state_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConfigState>();
    }
}
