use anyhow::Result;
use community_broker_score::broker::{annotate_brokers, detect_bridging_edges};
use community_broker_score::community::profile_communities;
use community_broker_score::{
    local_community_broker_score, BrokerError, BrokerPipeline, Config, Edge, EndpointPolicy, Node,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Five nodes, communities a = {1}, b = {2, 5}, c = {3, 4}
fn singleton_fixture() -> (Vec<Node<u32, &'static str>>, Vec<Edge<u32>>) {
    let nodes = vec![
        Node::new(1, "a"),
        Node::new(2, "b"),
        Node::new(3, "c"),
        Node::new(4, "c"),
        Node::new(5, "b"),
    ];
    let edges = vec![
        Edge::new(1, 2),
        Edge::new(2, 5),
        Edge::new(3, 4),
        Edge::new(4, 3),
        Edge::new(5, 1),
    ];
    (nodes, edges)
}

/// Same shape with a second member in community a, tied to node 1
fn paired_fixture() -> (Vec<Node<u32, &'static str>>, Vec<Edge<u32>>) {
    let (mut nodes, mut edges) = singleton_fixture();
    nodes.push(Node::new(6, "a"));
    edges.push(Edge::new(6, 1));
    (nodes, edges)
}

#[test]
fn singleton_fixture_stages() {
    init_logger();
    let (nodes, edges) = singleton_fixture();

    let bridging = detect_bridging_edges(&nodes, &edges);
    let pairs: Vec<(u32, u32)> = bridging.iter().map(|e| (e.a, e.b)).collect();
    assert_eq!(pairs, vec![(1, 2), (5, 1)]);

    let brokers = annotate_brokers(&nodes, &bridging);
    assert!(brokers[0].is_broker);
    assert_eq!(brokers[0].broker_count, 2);

    match profile_communities(&brokers, &edges, 1000) {
        Err(BrokerError::SingletonCommunity { community, n_people }) => {
            assert_eq!(community, "a");
            assert_eq!(n_people, 1);
        }
        other => panic!("expected singleton error, got {other:?}"),
    }
}

#[test]
fn singleton_fixture_fails_the_whole_run() {
    init_logger();
    let (nodes, edges) = singleton_fixture();

    let err = local_community_broker_score(&nodes, &edges).unwrap_err();
    assert!(matches!(err, BrokerError::SingletonCommunity { .. }));
    assert_eq!(
        err.to_string(),
        "community a has 1 member(s); at least 2 are required"
    );
}

#[test]
fn paired_fixture_scores() -> Result<()> {
    init_logger();
    let (nodes, edges) = paired_fixture();
    let result = local_community_broker_score(&nodes, &edges)?;

    let b = result.community(&"b").expect("community b");
    assert_eq!((b.n_people, b.n_brokers, b.cohesion), (2, 2, 1.0));
    let c = result.community(&"c").expect("community c");
    assert_eq!((c.n_people, c.n_brokers, c.cohesion), (2, 0, 1.0));
    let a = result.community(&"a").expect("community a");
    assert_eq!((a.n_people, a.n_brokers, a.cohesion), (2, 1, 1.0));

    // Node 1 reaches b through two ties, nodes 2 and 5 each reach a once.
    // cobrokers(a -> b) = 2, cobrokers(b -> a) = 2
    let half = 2.0 / 2f64.sqrt();
    let expected_1 = half + 2.0;
    let expected_2 = half + 2.0;
    assert!((result.score_of(&1).unwrap() - expected_1).abs() < 1e-12);
    assert!((result.score_of(&2).unwrap() - expected_2).abs() < 1e-12);
    assert!((result.score_of(&5).unwrap() - expected_2).abs() < 1e-12);
    for quiet in [3, 4, 6] {
        assert_eq!(result.score_of(&quiet), Some(0.0));
    }

    let node_1 = &result.nodes[0];
    assert!(node_1.is_broker);
    assert_eq!(node_1.broker_count, 2);
    Ok(())
}

#[test]
fn disconnected_community_is_a_structured_error() {
    init_logger();
    // community c = {3, 4, 7}; 7 only touches b
    let (mut nodes, mut edges) = paired_fixture();
    nodes.push(Node::new(7, "c"));
    edges.push(Edge::new(7, 2));

    let err = local_community_broker_score(&nodes, &edges).unwrap_err();
    match err {
        BrokerError::DisconnectedCommunity { community } => assert_eq!(community, "c"),
        other => panic!("expected disconnected error, got {other}"),
    }
}

#[test]
fn dangling_edges_follow_the_endpoint_policy() -> Result<()> {
    init_logger();
    let (nodes, mut edges) = paired_fixture();
    let baseline = local_community_broker_score(&nodes, &edges)?;

    edges.push(Edge::new(2, 404));
    let lenient = local_community_broker_score(&nodes, &edges)?;
    assert_eq!(lenient, baseline);

    let strict =
        BrokerPipeline::new(Config::default().with_unknown_endpoints(EndpointPolicy::Reject));
    match strict.run(&nodes, &edges) {
        Err(BrokerError::UnknownEndpoint { node, .. }) => assert_eq!(node, "404"),
        other => panic!("expected unknown endpoint error, got {other:?}"),
    }
    Ok(())
}

#[test]
fn repeated_node_id_keeps_its_first_label() -> Result<()> {
    init_logger();
    let nodes = vec![
        Node::new(1, "a"),
        Node::new(2, "a"),
        Node::new(3, "b"),
        Node::new(4, "b"),
        Node::new(1, "c"),
    ];
    let edges = vec![Edge::new(1, 2), Edge::new(3, 4), Edge::new(1, 3)];

    let result = local_community_broker_score(&nodes, &edges)?;

    let ids: Vec<(u32, &str)> = result.nodes.iter().map(|n| (n.id, n.community_id)).collect();
    assert_eq!(ids, vec![(1, "a"), (2, "a"), (3, "b"), (4, "b")]);
    assert!(result.community(&"c").is_none());

    let people: usize = result.communities.iter().map(|c| c.n_people).sum();
    assert_eq!(people, result.nodes.len());

    // 2 / (1 * √1) + 2 / 1
    assert_eq!(result.score_of(&1), Some(4.0));
    assert_eq!(result.score_of(&3), Some(4.0));
    Ok(())
}

#[test]
fn repeated_runs_serialize_identically() -> Result<()> {
    init_logger();
    let (nodes, edges) = paired_fixture();
    let pipeline =
        BrokerPipeline::new(Config::default().with_parallel_threshold(1).with_threads(4));

    let first = serde_json::to_string(&pipeline.run(&nodes, &edges)?)?;
    let second = serde_json::to_string(&pipeline.run(&nodes, &edges)?)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn string_ids_work_too() -> Result<()> {
    init_logger();
    let nodes: Vec<Node<String, String>> = [
        ("ana", "ops"),
        ("bo", "ops"),
        ("cy", "eng"),
        ("di", "eng"),
        ("ed", "eng"),
    ]
    .into_iter()
    .map(|(id, team)| Node::new(id.to_string(), team.to_string()))
    .collect();
    let edges: Vec<Edge<String>> = [("ana", "bo"), ("cy", "di"), ("di", "ed"), ("bo", "cy")]
        .into_iter()
        .map(|(a, b)| Edge::new(a.to_string(), b.to_string()))
        .collect();

    let result = local_community_broker_score(&nodes, &edges)?;
    let eng = result.community(&"eng".to_string()).expect("eng profile");
    assert!((eng.cohesion - 4.0 / 3.0).abs() < 1e-12);

    // bo: 3 / (4/3) + 2 / 1
    let bo = result.score_of(&"bo".to_string()).unwrap();
    assert!((bo - (2.25 + 2.0)).abs() < 1e-12);
    // cy: 2 / 1 + 3 / (4/3)
    let cy = result.score_of(&"cy".to_string()).unwrap();
    assert!((cy - (2.0 + 2.25)).abs() < 1e-12);
    Ok(())
}
