


#[cfg(test)]
mod deadline_engine_tests;
