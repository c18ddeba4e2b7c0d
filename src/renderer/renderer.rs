use std::any::TypeId;

use tracing::{debug, trace};

use crate::config::{ConfigState, RenderFn};
use crate::error::{Error, Result};
use crate::model::{Field, Printable, Shape};
use crate::renderer::components::push_line;
use crate::renderer::traits::RenderContext;

/// Renders `value` from the root with the overrides held in `state`.
pub fn render(value: &dyn Printable, state: &ConfigState) -> Result<String> {
    debug!(root = value.type_name(), "rendering value");
    let output = Renderer::new(state).render(value)?;
    debug!(bytes = output.len(), "rendered value");
    Ok(output)
}

/// A non-null value after its transparent wrappers have been peeled off.
struct Resolved<'a> {
    /// The declared value, each wrapper inside it, then the runtime value.
    layers: Vec<&'a dyn Printable>,
    body: Body<'a>,
}

enum Body<'a> {
    Leaf(String),
    Composite(Vec<Field<'a>>),
}

impl<'a> Resolved<'a> {
    /// Returns `None` when the value, or any wrapper around it, is null.
    fn of(value: &'a dyn Printable) -> Option<Self> {
        let mut layers = vec![value];
        let mut current = value;
        loop {
            let body = match current.shape() {
                Shape::Null => return None,
                Shape::Transparent(inner) => {
                    layers.push(inner);
                    current = inner;
                    continue;
                }
                Shape::Leaf(text) => Body::Leaf(text),
                Shape::Composite(fields) => Body::Composite(fields),
            };
            return Some(Resolved { layers, body });
        }
    }

    fn runtime(&self) -> &'a dyn Printable {
        self.layers[self.layers.len() - 1]
    }
}

/// Walks a value graph and resolves, for every node, which rule prints it.
///
/// For each value the first matching rule wins:
/// null, path renderer, runtime-type renderer, leaf text, composite fields.
pub struct Renderer<'c> {
    state: &'c ConfigState,
    /// Composites currently being printed, keyed by address and runtime type.
    ancestors: Vec<(usize, TypeId)>,
}

impl<'c> Renderer<'c> {
    pub fn new(state: &'c ConfigState) -> Self {
        Self {
            state,
            ancestors: Vec::new(),
        }
    }

    pub fn render(&mut self, value: &dyn Printable) -> Result<String> {
        let mut output = String::new();
        self.render_value(value, &RenderContext::new(), &mut output)?;
        Ok(output)
    }

    fn render_value(
        &mut self,
        declared: &dyn Printable,
        context: &RenderContext,
        output: &mut String,
    ) -> Result<()> {
        let state = self.state;

        if context.depth > state.max_depth() {
            return Err(Error::DepthLimitExceeded {
                path: context.path_label().to_string(),
                limit: state.max_depth(),
            });
        }

        let Some(resolved) = Resolved::of(declared) else {
            push_line(output, "null");
            return Ok(());
        };

        // Path renderers see the value as declared, wrappers included.
        if !context.path.is_empty() {
            if let Some(render) = state.path_renderer(&context.path) {
                trace!(path = %context.path, "applying path renderer");
                return apply(render, declared, context, output);
            }
        }

        // Outermost wrapper first, so `Option<T>` beats `T`.
        for &layer in &resolved.layers {
            if let Some(render) = state.type_renderer(layer.as_any().type_id()) {
                trace!(path = %context.path, type_name = layer.type_name(), "applying type renderer");
                return apply(render, layer, context, output);
            }
        }

        let runtime = resolved.runtime();
        match resolved.body {
            Body::Leaf(text) => {
                push_line(output, &text);
                Ok(())
            }
            Body::Composite(fields) => self.render_composite(runtime, &fields, context, output),
        }
    }

    fn render_composite(
        &mut self,
        value: &dyn Printable,
        fields: &[Field<'_>],
        context: &RenderContext,
        output: &mut String,
    ) -> Result<()> {
        let key = (
            value as *const dyn Printable as *const () as usize,
            value.as_any().type_id(),
        );

        if self.ancestors.contains(&key) {
            trace!(path = %context.path, type_name = value.type_name(), "cycle detected");
            push_line(output, &format!("<cycle: {}>", value.type_name()));
            return Ok(());
        }

        push_line(output, value.type_name());

        self.ancestors.push(key);
        let result = self.render_fields(fields, context, output);
        self.ancestors.pop();
        result
    }

    fn render_fields(
        &mut self,
        fields: &[Field<'_>],
        context: &RenderContext,
        output: &mut String,
    ) -> Result<()> {
        let state = self.state;

        for field in fields {
            let child = context.child(field);

            if state.is_type_excluded(field.declared_type) {
                trace!(path = %child.path, declared = field.declared_type_name, "field type excluded");
                continue;
            }
            if state.is_path_excluded(&child.path) {
                trace!(path = %child.path, "field path excluded");
                continue;
            }

            output.push_str(&child.indent());
            output.push_str(&field.name);
            output.push_str(" = ");
            self.render_value(field.value, &child, output)?;
        }

        Ok(())
    }
}

fn apply(
    render: &RenderFn,
    value: &dyn Printable,
    context: &RenderContext,
    output: &mut String,
) -> Result<()> {
    let text = render
        .call(value.as_any())
        .map_err(|source| Error::Renderer {
            path: context.path_label().to_string(),
            source,
        })?;
    push_line(output, &text);
    Ok(())
}
