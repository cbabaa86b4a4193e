use rand::rngs::StdRng;
use rand::SeedableRng;
use spectrum_splits::spectrum::accumulator::region_spectra;
use spectrum_splits::spectrum::report::write_spectrum_table;
use spectrum_splits::spectrum::splits::find_splits;
use spectrum_splits::spectrum::{Spectrum, SplitParams};
use spectrum_splits::tree::{MutationTree, NodeId};
use std::collections::HashMap;

/// Two clades with opposite spectra: one all A>C, one all G>T, with a few
/// tips each.
fn two_clade_tree() -> (MutationTree, NodeId, NodeId) {
    let mut tree = MutationTree::new("root");
    let mut pos = 0;
    let mut tokens = |ty: &str, n: usize| -> Vec<String> {
        (0..n)
            .map(|_| {
                pos += 1;
                format!("{}{}{}", &ty[0..1], pos, &ty[1..2])
            })
            .collect()
    };

    let clade_a = tree.add_child(tree.root(), "clade_a", tokens("AC", 30));
    for i in 0..3 {
        let t = tokens("AC", 10);
        tree.add_child(clade_a, format!("a{}", i), t);
    }
    let clade_b = tree.add_child(tree.root(), "clade_b", tokens("GT", 30));
    for i in 0..3 {
        let t = tokens("GT", 10);
        tree.add_child(clade_b, format!("b{}", i), t);
    }
    (tree, clade_a, clade_b)
}

#[test]
fn split_search_separates_opposed_clades() {
    let (tree, clade_a, clade_b) = two_clade_tree();
    let params = SplitParams {
        min_mutations: 20.0,
        min_chi: 10.0,
        max_branch_mutations: usize::MAX,
    };
    let scan = find_splits(&tree, None, &params);

    // One of the clades becomes a boundary; the other stays with the root
    // region, which is then spectrally pure and finalizes.
    assert!(scan.partition.contains(&tree.root()));
    assert!(scan.partition.contains(&clade_a) || scan.partition.contains(&clade_b));
    assert_eq!(scan.partition.len(), 2);

    // Both final regions carry a single substitution type.
    for root in &scan.partition {
        let spectrum = region_spectra(&tree, *root, &scan.partition, None, usize::MAX)
            .remove(root)
            .unwrap();
        assert_eq!(spectrum.observed_types().count(), 1);
        assert_eq!(spectrum.total(), 60.0);
    }
}

#[test]
fn pipeline_report_lists_all_partitions() {
    let (tree, _, _) = two_clade_tree();
    let params = SplitParams {
        min_mutations: 20.0,
        min_chi: 10.0,
        max_branch_mutations: usize::MAX,
    };
    let scan = find_splits(&tree, None, &params);

    let mut spectra: HashMap<NodeId, Spectrum> = HashMap::new();
    for root in &scan.partition {
        let spectrum = region_spectra(&tree, *root, &scan.partition, None, usize::MAX)
            .remove(root)
            .unwrap();
        spectra.insert(*root, spectrum);
    }

    let mut buf = Vec::new();
    let mut rng = StdRng::seed_from_u64(3);
    write_spectrum_table(&mut buf, &tree, &scan.partition, &spectra, 2, &mut rng).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), scan.partition.len() + 1);
    assert!(lines[0].starts_with("Node_ID\tTotal_Mutations\tNumber_Tips\tMutations:Tips"));
    assert!(lines[0].ends_with("\tExemplar_Tips"));
    for line in &lines[1..] {
        let fields: Vec<&str> = line.split('\t').collect();
        // Three tips per region, two exemplars sampled.
        assert_eq!(fields[2], "3");
        assert_eq!(fields.last().unwrap().split(',').count(), 2);
    }
}
