//! Light-weight BibTeX scanning. Only `@article` entries and their
//! `journal` field are read; everything else in the file is ignored.

pub mod extractor;
