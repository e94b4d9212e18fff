use proptest::prelude::*;
use quantree::{
    assign_clusters, ColorCatalog, DistanceGraph, IndexedMinHeap, Mst, Quantizer, Rgb, NO_PARENT,
};
use std::collections::HashSet;

fn arb_pixel() -> impl Strategy<Value = Rgb> {
    (0u8..=255, 0u8..=255, 0u8..=255).prop_map(Rgb::from)
}

/// Small images: 1..36 pixels reshaped to 1 x n.
fn arb_image() -> impl Strategy<Value = Vec<Rgb>> {
    prop::collection::vec(arb_pixel(), 1..36)
}

/// Brute-force Kruskal with label merging, for cross-checking Prim.
fn kruskal_weight(graph: &DistanceGraph) -> f64 {
    let n = graph.len();
    let mut edges = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            edges.push((graph.distance(i, j).unwrap(), i, j));
        }
    }
    edges.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut comp: Vec<usize> = (0..n).collect();
    let mut weight = 0.0;
    for (w, i, j) in edges {
        if comp[i] != comp[j] {
            let (from, to) = (comp[j], comp[i]);
            for c in comp.iter_mut() {
                if *c == from {
                    *c = to;
                }
            }
            weight += w;
        }
    }
    weight
}

proptest! {
    #[test]
    fn prop_catalog_complete_and_unique(pixels in arb_image()) {
        let catalog = ColorCatalog::extract(&pixels, 1, pixels.len()).unwrap();

        prop_assert!(catalog.len() <= pixels.len());

        // Every pixel color appears exactly once in the catalog.
        let from_pixels: HashSet<Rgb> = pixels.iter().copied().collect();
        let from_catalog: HashSet<Rgb> = catalog.colors().iter().copied().collect();
        prop_assert_eq!(catalog.len(), from_catalog.len());
        prop_assert_eq!(from_pixels, from_catalog);

        // The index map agrees with the color sequence.
        for (i, &c) in catalog.colors().iter().enumerate() {
            prop_assert_eq!(catalog.index_of(c), Some(i));
        }
    }

    #[test]
    fn prop_distance_matrix_is_symmetric_with_zero_diagonal(pixels in arb_image()) {
        let catalog = ColorCatalog::extract(&pixels, 1, pixels.len()).unwrap();
        let graph = DistanceGraph::build(&catalog);

        for i in 0..graph.len() {
            prop_assert_eq!(graph.distance(i, i).unwrap(), 0.0);
            for j in 0..graph.len() {
                prop_assert_eq!(
                    graph.distance(i, j).unwrap(),
                    graph.distance(j, i).unwrap()
                );
            }
        }
    }

    #[test]
    fn prop_heap_drains_in_nondecreasing_order(
        keys in prop::collection::vec(0.0f64..1000.0, 1..40),
        decreases in prop::collection::vec((0usize..40, 0.0f64..1.0), 0..10),
    ) {
        let n = keys.len();
        let mut heap = IndexedMinHeap::with_capacity(n);
        for (i, &k) in keys.iter().enumerate() {
            heap.insert(k, i).unwrap();
        }

        // Lower some keys to a fraction of their current value.
        for &(idx, frac) in &decreases {
            let idx = idx % n;
            if let Some(current) = heap.key_of(idx) {
                heap.decrease_key(idx, current * frac).unwrap();
            }
        }

        let mut last = f64::NEG_INFINITY;
        while !heap.is_empty() {
            let (key, _) = heap.pop_min().unwrap();
            prop_assert!(key >= last, "drain out of order: {} after {}", key, last);
            last = key;
        }
    }

    #[test]
    fn prop_prim_matches_kruskal_on_small_graphs(
        pixels in prop::collection::vec(arb_pixel(), 2..=8)
    ) {
        let catalog = ColorCatalog::extract(&pixels, 1, pixels.len()).unwrap();
        let graph = DistanceGraph::build(&catalog);
        let mst = Mst::build(&graph).unwrap();
        prop_assert!((mst.total_weight() - kruskal_weight(&graph)).abs() < 1e-6);
    }

    #[test]
    fn prop_mst_is_a_single_spanning_tree(pixels in arb_image()) {
        let catalog = ColorCatalog::extract(&pixels, 1, pixels.len()).unwrap();
        let graph = DistanceGraph::build(&catalog);
        let mst = Mst::build(&graph).unwrap();
        let n = mst.len();

        let roots = mst.parent().iter().filter(|&&p| p == NO_PARENT).count();
        prop_assert_eq!(roots, 1);

        // Every node reaches the root without cycles.
        for start in 0..n {
            let mut node = start;
            let mut steps = 0;
            while mst.parent()[node] != NO_PARENT {
                node = mst.parent()[node];
                steps += 1;
                prop_assert!(steps <= n, "cycle through node {}", start);
            }
        }
    }

    #[test]
    fn prop_k_equal_distinct_is_identity(pixels in arb_image()) {
        let catalog = ColorCatalog::extract(&pixels, 1, pixels.len()).unwrap();
        let graph = DistanceGraph::build(&catalog);
        let mst = Mst::build(&graph).unwrap();

        let labels = assign_clusters(&mst, mst.len()).unwrap();
        let identity: Vec<usize> = (0..mst.len()).collect();
        prop_assert_eq!(labels, identity);
    }

    #[test]
    fn prop_k_of_one_is_a_single_cluster(pixels in arb_image()) {
        let catalog = ColorCatalog::extract(&pixels, 1, pixels.len()).unwrap();
        let graph = DistanceGraph::build(&catalog);
        let mst = Mst::build(&graph).unwrap();

        let labels = assign_clusters(&mst, 1).unwrap();
        prop_assert!(labels.iter().all(|&l| l == labels[0]));
    }

    #[test]
    fn prop_cluster_count_is_exact(pixels in arb_image(), k in 1usize..10) {
        let catalog = ColorCatalog::extract(&pixels, 1, pixels.len()).unwrap();
        if k > catalog.len() {
            return Ok(());
        }
        let graph = DistanceGraph::build(&catalog);
        let mst = Mst::build(&graph).unwrap();

        let labels = assign_clusters(&mst, k).unwrap();
        let distinct: HashSet<usize> = labels.iter().copied().collect();
        prop_assert_eq!(distinct.len(), k);
    }

    #[test]
    fn prop_quantized_output_has_at_most_k_colors(pixels in arb_image(), k in 1usize..10) {
        let catalog = ColorCatalog::extract(&pixels, 1, pixels.len()).unwrap();
        if k > catalog.len() {
            return Ok(());
        }

        let result = Quantizer::new(k).quantize(&pixels, 1, pixels.len()).unwrap();
        prop_assert_eq!(result.pixels.len(), pixels.len());
        prop_assert_eq!(result.distinct_colors, catalog.len());

        let out_colors: HashSet<Rgb> = result.pixels.iter().copied().collect();
        prop_assert!(out_colors.len() <= k);
    }

    #[test]
    fn prop_requantization_is_idempotent(pixels in arb_image(), k in 1usize..6) {
        let catalog = ColorCatalog::extract(&pixels, 1, pixels.len()).unwrap();
        if k > catalog.len() {
            return Ok(());
        }

        let first = Quantizer::new(k).quantize(&pixels, 1, pixels.len()).unwrap();

        // Rounded cluster means can coincide, so the quantized image may
        // carry fewer than k colors; requantize at its actual count.
        let survivors: HashSet<Rgb> = first.pixels.iter().copied().collect();
        let second = Quantizer::new(survivors.len().min(k))
            .quantize(&first.pixels, 1, pixels.len())
            .unwrap();
        prop_assert_eq!(second.pixels, first.pixels);
    }
}
