use record_store::{db, Store};

async fn memory_store() -> Store {
    let pool = db::init_memory_pool().await.unwrap();
    Store::new(pool)
}

#[tokio::test]
async fn matrix_record_roundtrip() {
    let store = memory_store().await;

    let a = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
    let b = vec![vec![5.0, 6.0], vec![7.0, 8.0]];
    let product = vec![vec![19.0, 22.0], vec![43.0, 50.0]];

    let id = store
        .save_matrices("2x2", &a, &b, Some(&product))
        .await
        .unwrap();

    let record = store.get_matrices(id).await.unwrap().unwrap();
    assert_eq!(record.name, "2x2");
    assert_eq!(record.matrix_a, a);
    assert_eq!(record.matrix_b, b);
    assert_eq!(record.result, Some(product));
    assert!(record.created_at > 0);
}

#[tokio::test]
async fn missing_result_stays_none() {
    let store = memory_store().await;

    let a = vec![vec![2.0]];
    let b = vec![vec![3.0]];

    let without = store.save_matrices("pending", &a, &b, None).await.unwrap();
    let with_empty = store
        .save_matrices("degenerate", &vec![], &vec![], Some(&vec![]))
        .await
        .unwrap();

    let pending = store.get_matrices(without).await.unwrap().unwrap();
    assert_eq!(pending.result, None);

    let degenerate = store.get_matrices(with_empty).await.unwrap().unwrap();
    assert_eq!(degenerate.result, Some(vec![]));
}

#[tokio::test]
async fn list_matrices_newest_first() {
    let store = memory_store().await;

    let m = vec![vec![1.0]];
    let first = store.save_matrices("first", &m, &m, None).await.unwrap();
    let second = store.save_matrices("second", &m, &m, None).await.unwrap();

    let records = store.list_matrices().await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, second);
    assert_eq!(records[1].id, first);
}

#[tokio::test]
async fn delete_matrix_record() {
    let store = memory_store().await;

    let m = vec![vec![1.0]];
    let id = store.save_matrices("gone", &m, &m, None).await.unwrap();

    store.delete_matrices(id).await.unwrap();
    assert!(store.get_matrices(id).await.unwrap().is_none());
}

#[tokio::test]
async fn get_missing_record_is_none() {
    let store = memory_store().await;

    assert!(store.get_matrices(123).await.unwrap().is_none());
    assert!(store.get_graph(123).await.unwrap().is_none());
    assert!(store.get_sort(123).await.unwrap().is_none());
}

#[tokio::test]
async fn graph_record_roundtrip() {
    let store = memory_store().await;

    let adjacency = vec![vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]];
    let id = store.save_graph("path", 3, 2, &adjacency).await.unwrap();

    let record = store.get_graph(id).await.unwrap().unwrap();
    assert_eq!(record.name, "path");
    assert_eq!(record.vertices, 3);
    assert_eq!(record.edges, 2);
    assert_eq!(record.matrix, adjacency);

    store.delete_graph(id).await.unwrap();
    assert!(store.list_graphs().await.unwrap().is_empty());
}

#[tokio::test]
async fn sort_records_filter_by_algorithm() {
    let store = memory_store().await;

    store
        .save_sort("run a", &[3, 1, 2], "bubble", &[1, 2, 3], 3, 0.001)
        .await
        .unwrap();
    store
        .save_sort("run b", &[2, 1], "quick", &[1, 2], 1, 0.0005)
        .await
        .unwrap();

    let all = store.list_sorts(None).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, "run b");

    let bubble = store.list_sorts(Some("bubble")).await.unwrap();
    assert_eq!(bubble.len(), 1);
    assert_eq!(bubble[0].algorithm, "bubble");
    assert_eq!(bubble[0].array_size, 3);
    assert_eq!(bubble[0].input_array, vec![3, 1, 2]);
    assert_eq!(bubble[0].sorted_array, vec![1, 2, 3]);
}

#[tokio::test]
async fn stats_count_and_average() {
    let store = memory_store().await;

    let m = vec![vec![1.0]];
    store.save_matrices("m", &m, &m, None).await.unwrap();
    store
        .save_graph("g", 1, 0, &[vec![0]])
        .await
        .unwrap();
    store
        .save_sort("s1", &[2, 1], "bubble", &[1, 2], 2, 0.5)
        .await
        .unwrap();
    store
        .save_sort("s2", &[3, 2, 1], "bubble", &[1, 2, 3], 4, 1.5)
        .await
        .unwrap();

    let stats = store.stats().await.unwrap();
    assert_eq!(stats.graphs, 1);
    assert_eq!(stats.matrices, 1);
    assert_eq!(stats.sorts, 2);

    let bubble = &stats.sort_stats["bubble"];
    assert_eq!(bubble.avg_time, 1.0);
    assert_eq!(bubble.avg_comparisons, 3.0);
}

#[tokio::test]
async fn clear_all_empties_every_table() {
    let store = memory_store().await;

    let m = vec![vec![1.0]];
    store.save_matrices("m", &m, &m, None).await.unwrap();
    store.save_graph("g", 1, 0, &[vec![0]]).await.unwrap();
    store
        .save_sort("s", &[1], "bubble", &[1], 0, 0.0)
        .await
        .unwrap();

    store.clear_all().await.unwrap();

    let stats = store.stats().await.unwrap();
    assert_eq!(stats.graphs, 0);
    assert_eq!(stats.matrices, 0);
    assert_eq!(stats.sorts, 0);
    assert!(stats.sort_stats.is_empty());
}
