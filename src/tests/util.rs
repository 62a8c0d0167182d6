use crate::{Expression, Node, NodeId};

macro_rules! parse {
    ($s:expr) => { crate::parse($s).unwrap() };
}

macro_rules! lit {
    ($s:literal) => { crate::Node::Literal(crate::Literal::new($s).unwrap()) };
}

/// Joins lines into an outline as produced by `Expression::serialize`, where every line is
/// terminated with a newline.
macro_rules! outline {
    ($($line:literal),* $(,)?) => { alloc::string::String::from(concat!($($line, "\n"),*)) };
}

/// Allocates `node` and appends it to the children of `parent`.
pub fn attach(expression: &mut Expression, parent: NodeId, node: Node) -> NodeId {
    let id = expression.insert(node);
    expression.add_child(parent, id);
    id
}

/// Checks, for every node reachable from `id`, that each child points back at its parent, that
/// parentheticals wrap exactly one child, and that no sum or product has a child of its own kind.
pub fn assert_well_formed(expression: &Expression, id: NodeId) {
    if expression.node(id) == &Node::Parenthetical {
        assert_eq!(expression.children(id).len(), 1, "parenthetical {:?} must wrap one child", id);
    }

    for child in expression.children(id) {
        assert_eq!(expression.parent(*child), Some(id));

        let redundant = matches!(
            (expression.node(id), expression.node(*child)),
            (Node::Additive, Node::Additive) | (Node::Multiplicative, Node::Multiplicative)
        );
        assert!(!redundant, "redundant nesting below {:?}", id);

        assert_well_formed(expression, *child);
    }
}

/// Counts the parenthetical nodes reachable from `id`, including `id` itself.
pub fn count_parentheticals(expression: &Expression, id: NodeId) -> usize {
    let own = usize::from(expression.node(id) == &Node::Parenthetical);
    let below = expression.children(id).iter().map(|c| count_parentheticals(expression, *c));
    own + below.sum::<usize>()
}

/// Builds `a + [b + c]` by hand, without flattening. Returns the expression and the inner node.
pub fn right_nested_sum() -> (Expression, NodeId) {
    let mut e = Expression::new(Node::Additive);
    let root = e.root();
    attach(&mut e, root, lit!("a"));
    let inner = attach(&mut e, root, Node::Additive);
    attach(&mut e, inner, lit!("b"));
    attach(&mut e, inner, lit!("c"));
    (e, inner)
}
