use crate::classifiers::attribute_class_observers::{ClassCounts, NominalAttributeClassObserver};
use crate::classifiers::conditional_tests::AttributeSplitSuggestion;
use crate::classifiers::decision_tree::nodes::{
    Branch, LeafNode, Node, SplitNode, StopReason, UnresolvedNode,
};
use crate::classifiers::decision_tree::split_criteria::{
    GainRatioSplitCriterion, SplitCriterion, entropy,
};
use crate::classifiers::decision_tree::{DecisionTree, ExhaustionPolicy};
use crate::core::dataset::Dataset;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::{DenseInstance, Instance};
use std::collections::BTreeMap;
use tracing::{debug, info, trace};

/// Attribute availability for one build.
///
/// Under [`ExhaustionPolicy::Global`] a single context is shared by the
/// whole tree, so an attribute consumed by one branch is gone for all
/// others. Under [`ExhaustionPolicy::PerPath`] every node works on its own
/// copy inherited from its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildContext {
    available: Vec<bool>,
}

impl BuildContext {
    pub fn new(header: &InstanceHeader) -> Self {
        let mut available = vec![false; header.number_of_attributes()];
        for index in header.predictor_indices() {
            available[index] = true;
        }
        Self { available }
    }

    pub fn is_available(&self, index: usize) -> bool {
        self.available.get(index).copied().unwrap_or(false)
    }

    pub fn consume(&mut self, index: usize) {
        if let Some(flag) = self.available.get_mut(index) {
            *flag = false;
        }
    }

    pub fn any_available(&self) -> bool {
        self.available.iter().any(|&a| a)
    }

    /// Available attribute indices, ascending.
    pub fn available_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.available
            .iter()
            .enumerate()
            .filter_map(|(index, &a)| a.then_some(index))
    }
}

enum Growth {
    Leaf(String),
    Stop(StopReason),
    Split {
        suggestion: AttributeSplitSuggestion,
        partitions: Vec<(String, Vec<usize>)>,
    },
}

enum TrainNodeKind {
    Pending,
    Leaf(String),
    Unresolved(StopReason),
    Split {
        attribute_index: usize,
        merit: f64,
        children: Vec<(String, usize)>,
    },
}

struct TrainNode {
    depth: usize,
    training_rows: usize,
    kind: TrainNodeKind,
}

impl TrainNode {
    fn pending(depth: usize, training_rows: usize) -> Self {
        Self {
            depth,
            training_rows,
            kind: TrainNodeKind::Pending,
        }
    }
}

struct WorkItem {
    node: usize,
    rows: Vec<usize>,
    path_context: Option<BuildContext>,
}

/// Grows a multiway tree top-down by repeatedly splitting on the attribute
/// with the best merit.
pub struct TreeBuilder<C: SplitCriterion = GainRatioSplitCriterion> {
    criterion: C,
    exhaustion: ExhaustionPolicy,
}

impl TreeBuilder<GainRatioSplitCriterion> {
    pub fn new() -> Self {
        Self::with_criterion(GainRatioSplitCriterion::new())
    }
}

impl Default for TreeBuilder<GainRatioSplitCriterion> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: SplitCriterion> TreeBuilder<C> {
    pub fn with_criterion(criterion: C) -> Self {
        Self {
            criterion,
            exhaustion: ExhaustionPolicy::default(),
        }
    }

    pub fn with_exhaustion(mut self, exhaustion: ExhaustionPolicy) -> Self {
        self.exhaustion = exhaustion;
        self
    }

    pub fn build(&self, dataset: &Dataset) -> DecisionTree {
        let mut context = BuildContext::new(dataset.header());
        let root = self.grow(dataset, &mut context);
        let tree = DecisionTree::new(dataset.header_arc(), root);
        info!(rows = dataset.len(), exhaustion = %self.exhaustion, summary = %tree.summary(), "tree built");
        tree
    }

    /// Grows the tree for `dataset` and returns its root.
    ///
    /// Nodes are expanded depth first, children in ascending value order,
    /// from an explicit work list. Under the global policy `context` records
    /// which attributes were consumed; under the per-path policy it is left
    /// untouched.
    pub fn grow(&self, dataset: &Dataset, context: &mut BuildContext) -> Node {
        let instances = dataset.instances();
        let mut arena = vec![TrainNode::pending(0, dataset.len())];
        let mut stack = vec![WorkItem {
            node: 0,
            rows: dataset.all_indices(),
            path_context: self.path_context(context),
        }];

        while let Some(WorkItem {
            node,
            rows,
            mut path_context,
        }) = stack.pop()
        {
            let depth = arena[node].depth;
            let growth = {
                let ctx = path_context.as_ref().unwrap_or(&*context);
                self.grow_node(instances, &rows, ctx)
            };

            match growth {
                Growth::Leaf(label) => {
                    trace!(depth, rows = rows.len(), label = %label, "leaf");
                    arena[node].kind = TrainNodeKind::Leaf(label);
                }
                Growth::Stop(reason) => {
                    debug!(depth, rows = rows.len(), %reason, "node left unresolved");
                    arena[node].kind = TrainNodeKind::Unresolved(reason);
                }
                Growth::Split {
                    suggestion,
                    partitions,
                } => {
                    let attribute_index = suggestion.attribute_index();
                    match path_context.as_mut() {
                        Some(ctx) => ctx.consume(attribute_index),
                        None => context.consume(attribute_index),
                    }
                    debug!(
                        depth,
                        attribute = attribute_index,
                        merit = suggestion.merit(),
                        branches = suggestion.number_of_splits(),
                        "split"
                    );

                    let mut children = Vec::with_capacity(partitions.len());
                    let mut pending = Vec::with_capacity(partitions.len());
                    for (value, part) in partitions {
                        let child = arena.len();
                        arena.push(TrainNode::pending(depth + 1, part.len()));
                        children.push((value, child));
                        pending.push(WorkItem {
                            node: child,
                            rows: part,
                            path_context: path_context.clone(),
                        });
                    }

                    arena[node].kind = TrainNodeKind::Split {
                        attribute_index,
                        merit: suggestion.merit(),
                        children,
                    };
                    // reversed so the first child is expanded first
                    stack.extend(pending.into_iter().rev());
                }
            }
        }

        assemble(arena)
    }

    fn path_context(&self, context: &BuildContext) -> Option<BuildContext> {
        match self.exhaustion {
            ExhaustionPolicy::Global => None,
            ExhaustionPolicy::PerPath => Some(context.clone()),
        }
    }

    fn grow_node(
        &self,
        instances: &[DenseInstance],
        rows: &[usize],
        context: &BuildContext,
    ) -> Growth {
        if rows.is_empty() {
            return Growth::Stop(StopReason::EmptyPartition);
        }

        let class_counts = ClassCounts::from_rows(instances, rows);
        if let Some(label) = class_counts.single_label() {
            return Growth::Leaf(label.to_string());
        }

        if !context.any_available() {
            return Growth::Stop(StopReason::AttributesExhausted);
        }

        let class_entropy = entropy(&class_counts.weights());
        let candidates = context.available_indices().map(|index| {
            let observer = NominalAttributeClassObserver::observe(instances, rows, index);
            let merit = self
                .criterion
                .merit_of_split(&observer, rows.len(), class_entropy);
            trace!(attribute = index, merit, "candidate");
            AttributeSplitSuggestion::new(observer, merit)
        });

        let Some(suggestion) = AttributeSplitSuggestion::best_of(candidates) else {
            return Growth::Stop(StopReason::NoCandidate);
        };

        let partitions = partition(instances, rows, suggestion.attribute_index());
        Growth::Split {
            suggestion,
            partitions,
        }
    }
}

/// Groups `rows` by their value at `attribute_index`, values ascending.
fn partition(
    instances: &[DenseInstance],
    rows: &[usize],
    attribute_index: usize,
) -> Vec<(String, Vec<usize>)> {
    let mut parts: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for &row in rows {
        if let Some(value) = instances
            .get(row)
            .and_then(|i| i.value_at_index(attribute_index))
        {
            parts.entry(value).or_default().push(row);
        }
    }
    parts
        .into_iter()
        .map(|(value, rows)| (value.to_string(), rows))
        .collect()
}

/// Turns the arena into an owned tree. Children always sit after their
/// parent in the arena, so walking it backwards finishes every subtree
/// before the node that owns it.
fn assemble(arena: Vec<TrainNode>) -> Node {
    let mut built: Vec<Option<Node>> = Vec::with_capacity(arena.len());
    built.resize_with(arena.len(), || None);

    for (id, train) in arena.into_iter().enumerate().rev() {
        let TrainNode {
            depth,
            training_rows,
            kind,
        } = train;

        let node = match kind {
            TrainNodeKind::Leaf(label) => Node::Leaf(LeafNode::new(label, depth, training_rows)),
            TrainNodeKind::Unresolved(reason) => {
                Node::Unresolved(UnresolvedNode::new(reason, depth, training_rows))
            }
            TrainNodeKind::Pending => Node::Unresolved(UnresolvedNode::new(
                StopReason::NoCandidate,
                depth,
                training_rows,
            )),
            TrainNodeKind::Split {
                attribute_index,
                merit,
                children,
            } => {
                let branches = children
                    .into_iter()
                    .filter_map(|(value, child)| {
                        built[child].take().map(|node| Branch::new(value, node))
                    })
                    .collect();
                Node::Split(SplitNode::new(
                    attribute_index,
                    merit,
                    depth,
                    training_rows,
                    branches,
                ))
            }
        };
        built[id] = Some(node);
    }

    built
        .into_iter()
        .next()
        .flatten()
        .unwrap_or_else(|| Node::Unresolved(UnresolvedNode::new(StopReason::EmptyPartition, 0, 0)))
}
