use proptest::prelude::*;
use tfidf_core::idf::idf_weight;
use tfidf_core::{Document, DocumentFrequencies, HashingTf, Idf, PipelineConfig, TfIdfIndex};

fn term() -> impl Strategy<Value = String> {
    "[a-e]{1,3}"
}

fn corpus() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec(term(), 0..12), 1..16)
}

proptest! {
    #[test]
    fn tf_sum_equals_document_length(terms in prop::collection::vec(term(), 0..64), n in 1usize..64) {
        let tf = HashingTf::new(n).unwrap().transform(&terms);
        prop_assert_eq!(tf.total(), terms.len() as u64);
        prop_assert!(tf.indices().all(|i| (i as usize) < n));
    }

    #[test]
    fn document_frequency_bounded_by_corpus(docs in corpus(), n in 1usize..32) {
        let h = HashingTf::new(n).unwrap();
        let tfs: Vec<_> = docs.iter().map(|d| h.transform(d)).collect();
        let df = DocumentFrequencies::estimate(&tfs).unwrap();
        prop_assert!(df.iter().all(|(_, c)| c as usize <= docs.len()));
    }

    #[test]
    fn idf_non_increasing_in_df(num_docs in 1usize..1000, df in 0u32..1000, t in 0u32..5) {
        // Above the cutoff; crossing it raises the weight from 0.
        prop_assume!((df as usize) < num_docs && df >= t);
        prop_assert!(idf_weight(num_docs, df + 1, t) <= idf_weight(num_docs, df, t));
        prop_assert!(idf_weight(num_docs, df, t) >= 0.0);
    }

    #[test]
    fn features_below_cutoff_contribute_nothing(docs in corpus(), t in 1u32..4) {
        let h = HashingTf::new(16).unwrap();
        let tfs: Vec<_> = docs.iter().map(|d| h.transform(d)).collect();
        let df = DocumentFrequencies::estimate(&tfs).unwrap();
        let idf = Idf::fit(&df, t).unwrap();
        for (index, count) in df.iter() {
            if count < t {
                prop_assert_eq!(idf.weight(index), 0.0);
                for tf in &tfs {
                    prop_assert_eq!(idf.transform(tf).get(index), 0.0);
                }
            }
        }
    }

    #[test]
    fn pipeline_is_deterministic(docs in corpus(), q in term()) {
        let corpus: Vec<Document> = docs
            .into_iter()
            .enumerate()
            .map(|(i, terms)| Document::new(format!("doc{i}"), terms))
            .collect();
        let config = PipelineConfig::new(64, 1);
        let a = TfIdfIndex::build(&corpus, &config).unwrap().best_match(&q).unwrap();
        let b = TfIdfIndex::build(&corpus, &config).unwrap().best_match(&q).unwrap();
        prop_assert_eq!(&a.id, &b.id);
        prop_assert_eq!(a.score.to_bits(), b.score.to_bits());
    }
}
