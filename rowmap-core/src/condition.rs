use crate::{Result, Statement, TypeHandlerRegistry, Value};
use std::fmt::Write;

/// Logical connector between two condition nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    And,
    Or,
}

impl Connector {
    fn sql(&self) -> &'static str {
        match self {
            Connector::And => "AND",
            Connector::Or => "OR",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Equals,
    NotEquals,
    GreaterThan,
    GreaterEqual,
    LessThan,
    LessEqual,
    Like,
    PrefixLike,
    SuffixLike,
    In,
    Between,
    NotBetween,
    IsNull,
    IsNotNull,
}

/// One `column OP value(s)` term.
#[derive(Debug, Clone)]
pub struct Predicate {
    column: String,
    operator: Operator,
    values: Vec<Value>,
    nullable: bool,
}

impl Predicate {
    /// The single decision governing both SQL rendering and parameter
    /// binding. A predicate built over an absent value is skipped entirely
    /// unless it was declared nullable; the two paths must never diverge or
    /// placeholder and parameter counts drift apart.
    fn matches(&self) -> bool {
        self.nullable || self.values.iter().all(|v| !v.is_null())
    }

    fn render(&self, sql: &mut String) {
        match self.operator {
            Operator::IsNull => {
                let _ = write!(sql, "{} IS NULL", self.column);
            }
            Operator::IsNotNull => {
                let _ = write!(sql, "{} IS NOT NULL", self.column);
            }
            Operator::PrefixLike => {
                let _ = write!(sql, "{} like concat(?, '%')", self.column);
            }
            Operator::SuffixLike => {
                let _ = write!(sql, "{} like concat('%', ?)", self.column);
            }
            Operator::Like => {
                let _ = write!(sql, "{} like ?", self.column);
            }
            Operator::Between => {
                let _ = write!(sql, "{} BETWEEN ? AND ?", self.column);
            }
            Operator::NotBetween => {
                let _ = write!(sql, "{} NOT BETWEEN ? AND ?", self.column);
            }
            Operator::In => {
                let _ = write!(sql, "{} IN (", self.column);
                for i in 0..self.values.len() {
                    if i > 0 {
                        sql.push_str(", ");
                    }
                    sql.push('?');
                }
                sql.push(')');
            }
            Operator::Equals => {
                let _ = write!(sql, "{} = ?", self.column);
            }
            Operator::NotEquals => {
                let _ = write!(sql, "{} <> ?", self.column);
            }
            Operator::GreaterThan => {
                let _ = write!(sql, "{} > ?", self.column);
            }
            Operator::GreaterEqual => {
                let _ = write!(sql, "{} >= ?", self.column);
            }
            Operator::LessThan => {
                let _ = write!(sql, "{} < ?", self.column);
            }
            Operator::LessEqual => {
                let _ = write!(sql, "{} <= ?", self.column);
            }
        }
    }

    fn bind(&self, statement: &mut dyn Statement, mut index: usize) -> Result<usize> {
        for value in &self.values {
            let handler = TypeHandlerRegistry::global().lookup(&value.data_type());
            handler.set_parameter(statement, index, value)?;
            index += 1;
        }
        Ok(index)
    }
}

#[derive(Debug, Clone)]
enum Term {
    Predicate(Predicate),
    Nested(Condition),
}

#[derive(Debug, Clone)]
struct ConditionNode {
    /// `None` only for the first node of a chain.
    connector: Option<Connector>,
    term: Term,
}

impl ConditionNode {
    fn matches(&self) -> bool {
        match &self.term {
            Term::Predicate(predicate) => predicate.matches(),
            Term::Nested(condition) => condition.matches(),
        }
    }

    fn render(&self, sql: &mut String) {
        match &self.term {
            Term::Predicate(predicate) => predicate.render(sql),
            Term::Nested(condition) => {
                sql.push_str("( ");
                condition.render(sql);
                sql.push_str(" )");
            }
        }
    }

    fn bind(&self, statement: &mut dyn Statement, index: usize) -> Result<usize> {
        match &self.term {
            Term::Predicate(predicate) => predicate.bind(statement, index),
            Term::Nested(condition) => condition.bind(statement, index),
        }
    }
}

/// A chain of query predicates joined by `AND` / `OR`, rendered to a WHERE
/// clause and bound to a statement.
///
/// Built via the factory methods and chained with [`and`](Condition::and) /
/// [`or`](Condition::or):
///
/// ```rust
/// use rowmap_core::Condition;
///
/// let condition = Condition::nested(Condition::eq("name", "TODAY").or(Condition::eq("age", 10)))
///     .and(Condition::nested(Condition::eq("gender", 1).and(Condition::prefix_like("email", "a"))));
/// let mut sql = String::new();
/// condition.render(&mut sql);
/// assert_eq!(sql, "( name = ? OR age = ? ) AND ( gender = ? AND email like concat(?, '%') )");
/// ```
///
/// Nodes are stored in an append-only sequence; a predicate whose value is
/// absent drops out of both the SQL text and the bound parameters through one
/// shared decision, so placeholders and parameters always stay aligned.
#[derive(Debug, Clone, Default)]
pub struct Condition {
    nodes: Vec<ConditionNode>,
}

impl Condition {
    fn single(predicate: Predicate) -> Self {
        Self {
            nodes: vec![ConditionNode {
                connector: None,
                term: Term::Predicate(predicate),
            }],
        }
    }

    pub fn of(column: impl Into<String>, operator: Operator, value: impl Into<Value>) -> Self {
        Self::single(Predicate {
            column: column.into(),
            operator,
            values: vec![value.into()],
            nullable: false,
        })
    }

    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::of(column, Operator::Equals, value)
    }

    pub fn not_eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::of(column, Operator::NotEquals, value)
    }

    pub fn gt(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::of(column, Operator::GreaterThan, value)
    }

    pub fn ge(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::of(column, Operator::GreaterEqual, value)
    }

    pub fn lt(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::of(column, Operator::LessThan, value)
    }

    pub fn le(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::of(column, Operator::LessEqual, value)
    }

    pub fn like(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::of(column, Operator::Like, value)
    }

    pub fn prefix_like(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::of(column, Operator::PrefixLike, value)
    }

    pub fn suffix_like(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::of(column, Operator::SuffixLike, value)
    }

    /// An equality that still renders and binds when the value is NULL.
    pub fn nullable(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::single(Predicate {
            column: column.into(),
            operator: Operator::Equals,
            values: vec![value.into()],
            nullable: true,
        })
    }

    pub fn is_null(column: impl Into<String>) -> Self {
        Self::single(Predicate {
            column: column.into(),
            operator: Operator::IsNull,
            values: Vec::new(),
            nullable: true,
        })
    }

    pub fn is_not_null(column: impl Into<String>) -> Self {
        Self::single(Predicate {
            column: column.into(),
            operator: Operator::IsNotNull,
            values: Vec::new(),
            nullable: true,
        })
    }

    pub fn between(
        column: impl Into<String>,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> Self {
        Self::single(Predicate {
            column: column.into(),
            operator: Operator::Between,
            values: vec![low.into(), high.into()],
            nullable: false,
        })
    }

    pub fn not_between(
        column: impl Into<String>,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> Self {
        Self::single(Predicate {
            column: column.into(),
            operator: Operator::NotBetween,
            values: vec![low.into(), high.into()],
            nullable: false,
        })
    }

    pub fn is_in<V: Into<Value>>(
        column: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        Self::single(Predicate {
            column: column.into(),
            operator: Operator::In,
            values: values.into_iter().map(Into::into).collect(),
            nullable: false,
        })
    }

    /// Wrap a chain in parentheses so it joins other conditions as one unit.
    pub fn nested(condition: Condition) -> Self {
        Self {
            nodes: vec![ConditionNode {
                connector: None,
                term: Term::Nested(condition),
            }],
        }
    }

    fn join(mut self, connector: Connector, other: Condition) -> Self {
        let mut nodes = other.nodes.into_iter();
        if let Some(mut first) = nodes.next() {
            first.connector = if self.nodes.is_empty() {
                None
            } else {
                Some(connector)
            };
            self.nodes.push(first);
            self.nodes.extend(nodes);
        }
        self
    }

    pub fn and(self, other: Condition) -> Self {
        self.join(Connector::And, other)
    }

    pub fn or(self, other: Condition) -> Self {
        self.join(Connector::Or, other)
    }

    /// Whether any node would render.
    pub fn matches(&self) -> bool {
        self.nodes.iter().any(ConditionNode::matches)
    }

    /// Append the SQL text of the matching nodes. Returns whether anything
    /// was rendered. A connector is only emitted between two rendered nodes,
    /// so a skipped first node never leaves a dangling `AND`.
    pub fn render(&self, sql: &mut String) -> bool {
        let mut rendered = false;
        for node in &self.nodes {
            if !node.matches() {
                continue;
            }
            if rendered {
                let connector = node.connector.unwrap_or(Connector::And);
                sql.push(' ');
                sql.push_str(connector.sql());
                sql.push(' ');
            }
            node.render(sql);
            rendered = true;
        }
        rendered
    }

    /// Render into a fresh string, `None` when no node matches.
    pub fn to_sql(&self) -> Option<String> {
        let mut sql = String::new();
        self.render(&mut sql).then_some(sql)
    }

    /// Bind the parameters of the matching nodes starting at `index`, through
    /// the type handler registered for each value. Returns the next free
    /// index. Gated by the same decision as [`render`](Condition::render).
    pub fn bind(&self, statement: &mut dyn Statement, mut index: usize) -> Result<usize> {
        for node in &self.nodes {
            if !node.matches() {
                continue;
            }
            index = node.bind(statement, index)?;
        }
        Ok(index)
    }

    /// Bind all parameters starting at the first placeholder.
    pub fn set_parameters(&self, statement: &mut dyn Statement) -> Result<usize> {
        self.bind(statement, 1)
    }
}
