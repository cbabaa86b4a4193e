//! Tab-separated spectrum report, one row per partition root.

use super::Spectrum;
use crate::mutation::SUBST_TYPES;
use crate::tree::{MutationTree, NodeId};
use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{HashMap, HashSet};
use std::io::Write;

/// Writes the spectrum table for `partition`. Columns are `Node_ID`,
/// `Total_Mutations`, `Number_Tips`, `Mutations:Tips`, the substitution
/// types observed in any spectrum (lexicographic), and, when
/// `exemplar_tips > 0`, a comma-joined sample of descendant tip names
/// drawn without replacement.
pub fn write_spectrum_table<W: Write, R: Rng>(
    out: &mut W,
    tree: &MutationTree,
    partition: &HashSet<NodeId>,
    spectra: &HashMap<NodeId, Spectrum>,
    exemplar_tips: usize,
    rng: &mut R,
) -> Result<()> {
    let mut type_columns: Vec<usize> = Vec::new();
    for spectrum in spectra.values() {
        for ty in spectrum.observed_types() {
            if !type_columns.contains(&ty) {
                type_columns.push(ty);
            }
        }
    }
    type_columns.sort();

    write!(out, "Node_ID\tTotal_Mutations\tNumber_Tips\tMutations:Tips")?;
    for ty in &type_columns {
        write!(out, "\t{}", SUBST_TYPES[*ty])?;
    }
    if exemplar_tips > 0 {
        write!(out, "\tExemplar_Tips")?;
    }
    writeln!(out)?;

    let mut roots: Vec<NodeId> = partition.iter().copied().collect();
    roots.sort();
    for root in roots {
        let spectrum = spectra
            .get(&root)
            .with_context(|| format!("no spectrum for partition root {}", tree.name(root)))?;
        let total = spectrum.total();
        let tips = tree.region_tips(root, partition);
        let ratio = if tips.is_empty() {
            f64::INFINITY
        } else {
            total / tips.len() as f64
        };
        let proportions = spectrum
            .proportions()
            .with_context(|| format!("normalizing spectrum of {}", tree.name(root)))?;

        write!(
            out,
            "{}\t{}\t{}\t{:.4}",
            tree.name(root),
            total,
            tips.len(),
            ratio
        )?;
        for ty in &type_columns {
            write!(out, "\t{:.4}", proportions[*ty])?;
        }
        if exemplar_tips > 0 {
            let mut names: Vec<&str> = tips.iter().map(|id| tree.name(*id)).collect();
            let sample: Vec<&str> = if names.len() <= exemplar_tips {
                names
            } else {
                names.shuffle(rng);
                names.truncate(exemplar_tips);
                names
            };
            write!(out, "\t{}", sample.join(","))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_partition() -> (MutationTree, HashSet<NodeId>, HashMap<NodeId, Spectrum>) {
        let mut tree = MutationTree::new("root");
        let a = tree.add_child(tree.root(), "a", vec!["A1C".into(), "A2C".into()]);
        tree.add_child(a, "tip1", vec![]);
        tree.add_child(a, "tip2", vec![]);
        tree.add_child(tree.root(), "tip3", vec!["G5T".into()]);

        let partition: HashSet<_> = [tree.root(), a].into_iter().collect();
        let spectra = [
            crate::spectrum::accumulator::region_spectra(
                &tree,
                tree.root(),
                &partition,
                None,
                usize::MAX,
            ),
            crate::spectrum::accumulator::region_spectra(&tree, a, &partition, None, usize::MAX),
        ]
        .into_iter()
        .flatten()
        .collect();
        (tree, partition, spectra)
    }

    #[test]
    fn test_table_layout() {
        let (tree, partition, spectra) = sample_partition();
        let mut buf = Vec::new();
        let mut rng = StdRng::seed_from_u64(7);
        write_spectrum_table(&mut buf, &tree, &partition, &spectra, 0, &mut rng).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Node_ID\tTotal_Mutations\tNumber_Tips\tMutations:Tips\tAC\tGT"
        );
        // Root region: one mutation, one tip (tip3).
        assert_eq!(lines[1], "root\t1\t1\t1.0000\t0.0000\t1.0000");
        // Region a: two AC mutations over two tips.
        assert_eq!(lines[2], "a\t2\t2\t1.0000\t1.0000\t0.0000");
    }

    #[test]
    fn test_exemplar_tips_sampled_without_replacement() {
        let (tree, partition, spectra) = sample_partition();
        let mut buf = Vec::new();
        let mut rng = StdRng::seed_from_u64(7);
        write_spectrum_table(&mut buf, &tree, &partition, &spectra, 5, &mut rng).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let row_a = text.lines().last().unwrap();
        let exemplars = row_a.rsplit('\t').next().unwrap();
        let mut names: Vec<&str> = exemplars.split(',').collect();
        names.sort();
        // Fewer tips than requested: the full tip list appears.
        assert_eq!(names, vec!["tip1", "tip2"]);
    }

    #[test]
    fn test_zero_total_spectrum_is_an_error() {
        let mut tree = MutationTree::new("root");
        tree.add_child(tree.root(), "tip", vec![]);
        let partition: HashSet<_> = [tree.root()].into_iter().collect();
        let spectra: HashMap<_, _> =
            [(tree.root(), Spectrum::default())].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(1);
        let err = write_spectrum_table(&mut Vec::new(), &tree, &partition, &spectra, 0, &mut rng)
            .unwrap_err();
        assert!(err.to_string().contains("normalizing spectrum"));
    }
}
