use crate::model::data::chan::ThreadDescriptor;
use crate::model::imageboards::parser::post_parser::PostParser;

pub trait Imageboard {
    fn name(&self) -> &'static str;
    fn url_matches(&self, url: &str) -> bool;
    /// `None` when `input` is not one of the thread reference shapes the site accepts.
    fn thread_reference_to_descriptor(&self, input: &str) -> Option<ThreadDescriptor>;
    fn post_parser(&self) -> &(dyn PostParser + Send + Sync);
}
