use crate::json::JSON;
use crate::scheduling::{Adjuster, Cal};

impl JSON for Cal {}
impl JSON for Adjuster {}
