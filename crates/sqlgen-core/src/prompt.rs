/// Build the single-turn instruction prompt sent to the model backend.
///
/// Schema and question are embedded verbatim.
pub fn build_prompt(schema: &str, question: &str) -> String {
    format!(
        "You are an expert SQL developer. Given the following database schema:\n\n\
         {schema}\n\n\
         Write a SQL query that answers the following question:\n\n\
         {question}\n\n\
         Only return the SQL query. Do not include any explanation."
    )
}
