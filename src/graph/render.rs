//! ASCII dependency tree rendering

use super::component::ComponentId;
use super::renderable::RenderableDependency;
use std::collections::HashSet;

const BRANCH: &str = "+--- ";
const LAST_BRANCH: &str = "\\--- ";
const PIPE: &str = "|    ";
const SPACE: &str = "     ";

/// Render `root` and everything below it.
///
/// A node whose children were already shown is printed once more with ` (*)`
/// and not expanded again, which also stops cycles.
pub fn render_tree(root: &dyn RenderableDependency) -> String {
    let mut out = String::new();
    out.push_str(&node_label(root));
    out.push('\n');

    let mut expanded = HashSet::new();
    expanded.insert(root.id().clone());
    render_children(root, "", &mut expanded, &mut out);
    out
}

fn render_children(
    node: &dyn RenderableDependency,
    prefix: &str,
    expanded: &mut HashSet<ComponentId>,
    out: &mut String,
) {
    let children = node.children();
    let count = children.len();

    for (i, child) in children.iter().enumerate() {
        let last = i + 1 == count;
        let grandchildren = child.children();
        let repeated = !grandchildren.is_empty() && expanded.contains(child.id());

        out.push_str(prefix);
        out.push_str(if last { LAST_BRANCH } else { BRANCH });
        out.push_str(&node_label(child.as_ref()));
        if repeated {
            out.push_str(" (*)");
        }
        out.push('\n');

        if !repeated && !grandchildren.is_empty() {
            expanded.insert(child.id().clone());
            let child_prefix = format!("{}{}", prefix, if last { SPACE } else { PIPE });
            render_children(child.as_ref(), &child_prefix, expanded, out);
        }
    }
}

fn node_label(node: &dyn RenderableDependency) -> String {
    let mut label = node.name();
    if let Some(description) = node.description() {
        label.push_str(&format!(" ({})", description));
    }
    if !node.is_resolvable() {
        label.push_str(" FAILED");
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::component::{ResolutionResult, ResolvedComponent};
    use crate::graph::renderable::RenderableModuleResult;

    fn component(id: &ComponentId, deps: &[&ComponentId]) -> ResolvedComponent {
        ResolvedComponent {
            id: id.clone(),
            dependencies: deps.iter().map(|d| (*d).clone()).collect(),
        }
    }

    #[test]
    fn test_render_shared_dependency() {
        let root = ComponentId::project(":");
        let web = ComponentId::module("acme", "web", "2.0");
        let core = ComponentId::module("acme", "core", "1.0");
        let log = ComponentId::module("acme", "log", "1.1");
        let result = ResolutionResult::new(
            root.clone(),
            vec![
                component(&root, &[&web, &core]),
                component(&web, &[&core]),
                component(&core, &[&log]),
                component(&log, &[]),
            ],
        );

        let rendered = render_tree(&RenderableModuleResult::root(&result).unwrap());
        assert_eq!(
            rendered,
            "project :\n\
             +--- acme:web:2.0\n\
             |    \\--- acme:core:1.0\n\
             |         \\--- acme:log:1.1\n\
             \\--- acme:core:1.0 (*)\n"
        );
    }

    #[test]
    fn test_render_cycle_terminates() {
        let root = ComponentId::project(":");
        let a = ComponentId::module("g", "a", "1");
        let b = ComponentId::module("g", "b", "1");
        let result = ResolutionResult::new(
            root.clone(),
            vec![component(&root, &[&a]), component(&a, &[&b]), component(&b, &[&a])],
        );

        let rendered = render_tree(&RenderableModuleResult::root(&result).unwrap());
        assert_eq!(
            rendered,
            "project :\n\
             \\--- g:a:1\n     \
             \\--- g:b:1\n          \
             \\--- g:a:1 (*)\n"
        );
    }

    #[test]
    fn test_render_unresolved_leaf() {
        let root = ComponentId::project(":");
        let gone = ComponentId::module("g", "gone", "9");
        let result = ResolutionResult::new(root.clone(), vec![component(&root, &[&gone])]);

        let rendered = render_tree(&RenderableModuleResult::root(&result).unwrap());
        assert_eq!(rendered, "project :\n\\--- g:gone:9 FAILED\n");
    }
}
