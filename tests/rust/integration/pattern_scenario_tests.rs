// End-to-end pattern compilation through the public builder API
use cypher_pattern::pattern::UnionMember;
use cypher_pattern::{
    Create, CypherEnvironment, Direction, EnvironmentConfig, Expr, GraphPattern, LabelExpr,
    LabelOperator, Length, Match, NodePattern, NodeRef, PathPattern, PathRef, Pattern,
    PatternError, Quantifier, RelationshipPattern, RelationshipRef, ToCypher,
};
use serde_json::json;

fn knows_path() -> PathPattern {
    let mut path = PathPattern::new();
    path.node(Some(NodeRef::named("n")))
        .unwrap()
        .rel(Some(RelationshipRef::named("r").with_type("KNOWS")))
        .node(Some(NodeRef::named("m")));
    path
}

#[test]
fn test_simple_path() {
    assert_eq!(knows_path().build().cypher, "(n)-[r:KNOWS]->(m)");
}

#[test]
fn test_quantified_path() {
    let mut path = knows_path();
    path.with_quantifier(Quantifier::OneOrMore).unwrap();
    assert_eq!(path.build().cypher, "((n)-[r:KNOWS]->(m))+");
}

#[test]
fn test_labels_without_variable() {
    let node = NodePattern::new(NodeRef::new().with_labels(vec!["Label1", "Label2"]))
        .without_variable();
    assert_eq!(node.build().cypher, "(:Label1:Label2)");
}

#[test]
fn test_variable_length_without_variable() {
    let rel = RelationshipPattern::new(RelationshipRef::new().with_type("TYPE"))
        .without_variable()
        .with_length(Length::between(1, 3))
        .unwrap();
    assert_eq!(rel.build().cypher, "-[:TYPE*1..3]->");
}

#[test]
fn test_node_after_node_always_fails() {
    let mut path = PathPattern::new();
    path.node(None).unwrap();
    assert_eq!(path.node(None).unwrap_err(), PatternError::NodeAfterNode);

    let mut path = knows_path();
    assert_eq!(
        path.node(Some(NodeRef::new())).unwrap_err(),
        PatternError::NodeAfterNode
    );
}

#[test]
fn test_union_legality() {
    let quantified = || {
        let mut path = PathPattern::quantified(Quantifier::Exact(2)).unwrap();
        path.node(None).unwrap();
        path
    };
    let simple = || {
        let mut path = PathPattern::new();
        path.node(None).unwrap();
        path
    };

    assert_eq!(
        PathPattern::new().union([simple(), simple()]).unwrap_err(),
        PatternError::SimplePatternUnion { index: 1 }
    );
    assert!(PathPattern::new().union([quantified(), simple()]).is_ok());
    assert!(PathPattern::new().union([quantified(), quantified()]).is_ok());
}

#[test]
fn test_chained_unions() {
    let mut middle = PathPattern::quantified(Quantifier::between(1, 5)).unwrap();
    middle
        .node(Some(NodeRef::named("x")))
        .unwrap()
        .rel(None)
        .without_variable()
        .with_direction(Direction::Undirected)
        .node(Some(NodeRef::named("y")));

    let mut path = PathPattern::new();
    path.union([UnionMember::from(NodeRef::named("a")), UnionMember::from(middle)])
        .unwrap()
        .union([NodeRef::named("b")])
        .unwrap();
    assert_eq!(path.build().cypher, "(a)((x)-[]-(y)){1,5}(b)");
}

#[test]
fn test_standalone_chain_with_params() {
    let movie = NodeRef::new().with_labels(vec!["Movie"]);
    let person = NodeRef::new().with_labels(vec!["Person"]);
    let chain = Pattern::new(person.clone())
        .with_property("name", Expr::param(json!("Keanu Reeves")))
        .related(Some(RelationshipRef::new().with_type("ACTED_IN")))
        .with_property("role", Expr::param(json!("Neo")))
        .to(Some(movie))
        .with_property("released", Expr::param(json!(1999)));

    let result = Match::new(chain).build();
    assert_eq!(
        result.cypher,
        "MATCH ((this0:Person { name: $param0 })-[this1:ACTED_IN { role: $param1 }]->(this2:Movie { released: $param2 }))"
    );
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "cypher": result.cypher,
            "params": { "param0": "Keanu Reeves", "param1": "Neo", "param2": 1999 }
        })
    );
}

#[test]
fn test_shared_reference_renders_same_name() {
    let a = NodeRef::new();
    let mut first = PathPattern::new();
    first.node(Some(a.clone())).unwrap();
    let mut second = PathPattern::new();
    second
        .node(Some(NodeRef::new()))
        .unwrap()
        .rel(None)
        .node(Some(a));

    let group = GraphPattern::new(vec![first, second]);
    assert_eq!(group.build().cypher, "(this0), (this1)-[this2]->(this0)");
}

#[test]
fn test_rendering_is_idempotent_through_one_environment() {
    let mut path = knows_path();
    path.with_quantifier(Quantifier::at_most(3)).unwrap();
    let mut env = CypherEnvironment::default();
    let first = path.to_cypher(&mut env);
    assert_eq!(first, path.to_cypher(&mut env));
    assert_eq!(first, "((n)-[r:KNOWS]->(m)){,3}");
}

#[test]
fn test_label_expression_and_operator_config() {
    let config = EnvironmentConfig {
        prefix: "v".to_string(),
        label_operator: LabelOperator::Ampersand,
        ..Default::default()
    };
    let flat = NodePattern::new(NodeRef::new().with_labels(vec!["A", "B"]));
    assert_eq!(flat.build_with(config.clone()).cypher, "(v0:A&B)");

    let expr = LabelExpr::or([LabelExpr::label("A"), LabelExpr::not(LabelExpr::label("B"))]);
    let node = NodePattern::new(NodeRef::named("n").with_labels(expr));
    assert_eq!(node.build_with(config).cypher, "(n:A|!B)");
}

#[test]
fn test_clause_with_path_variable_and_chaining() {
    let mut path = knows_path();
    path.with_path_variable(PathRef::named("p"));
    let result = Match::new(path)
        .then(Match::optional(NodeRef::named("x")))
        .then(Create::new(NodeRef::named("y").with_labels(vec!["Y"])))
        .build();
    assert_eq!(
        result.cypher,
        "MATCH p = (n)-[r:KNOWS]->(m)\nOPTIONAL MATCH (x)\nCREATE (y:Y)"
    );
}

#[test]
fn test_collect_variables_of_group() {
    let n = NodeRef::named("n");
    let mut path = PathPattern::new();
    path.node(Some(n.clone()))
        .unwrap()
        .rel(None)
        .with_length(Length::Unbounded)
        .unwrap()
        .node(None);
    let group = GraphPattern::new(vec![path]);

    let variables = group.collect_variables();
    assert_eq!(variables.len(), 3);
    assert_eq!(variables[0].id(), n.id());
}

#[test]
fn test_standalone_chain_is_always_wrapped() {
    let chain = Pattern::new(NodeRef::named("a"))
        .related(Some(RelationshipRef::named("r")))
        .to(Some(NodeRef::named("b")));
    assert_eq!(chain.build().cypher, "((a)-[r]->(b))");
    assert_eq!(Pattern::new(NodeRef::named("a")).build().cypher, "((a))");
}

#[test]
fn test_user_name_matching_generated_prefix_stays_distinct() {
    let mut path = PathPattern::new();
    path.node(Some(NodeRef::named("this0")))
        .unwrap()
        .rel(None)
        .node(None);
    assert_eq!(path.build().cypher, "(this0)-[this1]->(this2)");
}
