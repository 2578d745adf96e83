// src/datasets.rs

/// A static record naming one Figshare-hosted dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dataset<'a> {
    pub name: &'a str,
    pub url: &'a str,
    /// Upstream file name; only its extension matters here.
    pub filename: &'a str,
    pub description: &'a str,
}

impl Dataset<'_> {
    /// True when the payload must be gunzipped before parsing.
    pub fn is_gzipped(&self) -> bool {
        self.filename.ends_with(".gz")
    }

    /// Deterministic output file name, e.g. `dictrank_cmax.parquet`.
    pub fn output_file_name(&self) -> String {
        format!("dictrank_{}.parquet", self.name)
    }
}

/// The eight DICTrank tables, in processing order.
pub static DATASETS: &[Dataset<'static>] = &[
    Dataset {
        name: "dictrank_binarised",
        url: "https://ndownloader.figshare.com/files/42691171",
        filename: "DICTrank_binarised.csv.gz",
        description: "FDA Drug-Induced Cardiotoxicity Rank labels",
    },
    Dataset {
        name: "dictrank_ambiguous",
        url: "https://ndownloader.figshare.com/files/42691174",
        filename: "DICTrank_unique_ambiguous_compounds.csv",
        description: "Compounds with ambiguous cardiotoxicity classification",
    },
    Dataset {
        name: "cellpainting",
        url: "https://ndownloader.figshare.com/files/42691156",
        filename: "CellPainting_processed.csv.gz",
        description: "Cell Painting morphological features (1783 features)",
    },
    Dataset {
        name: "gene_expression",
        url: "https://ndownloader.figshare.com/files/42691165",
        filename: "LINCSL1000_processed.csv.gz",
        description: "L1000 Gene Expression features (978 landmark genes)",
    },
    Dataset {
        name: "gene_ontology",
        url: "https://ndownloader.figshare.com/files/42691162",
        filename: "GeneOntology_processed.csv.gz",
        description: "Gene Ontology annotations (4428 GO terms)",
    },
    Dataset {
        name: "cmax",
        url: "https://ndownloader.figshare.com/files/42691159",
        filename: "Cmax_processed.csv.gz",
        description: "Maximum plasma concentration data",
    },
    Dataset {
        name: "moa",
        url: "https://ndownloader.figshare.com/files/42691168",
        filename: "MOA_processed.csv.gz",
        description: "Mechanism of Action annotations",
    },
    Dataset {
        name: "sider",
        url: "https://ndownloader.figshare.com/files/42691153",
        filename: "sider_binarised.csv.gz",
        description: "SIDER side effects binarized",
    },
];
