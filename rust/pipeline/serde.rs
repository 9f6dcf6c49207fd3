use crate::json::JSON;
use crate::pipeline::{Anchors, PipelinePolicy, Stage, Timeline};

impl JSON for Timeline {}
impl JSON for Stage {}
impl JSON for Anchors {}
impl JSON for PipelinePolicy {}
