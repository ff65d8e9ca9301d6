//! pglog 数据库表结构定义
//!
//! 目标表为固定的四列结构：time、source、alert_level、message。
//! schema 与表名来自运行时配置，因此 SQL 文本在此按需生成。

/// 插入语句的列清单，顺序即插入顺序
pub const INSERT_COLUMNS: &str = "time, source, alert_level, message";

/// 判断名称是否为普通 SQL 标识符
///
/// schema 与表名会直接拼入 SQL 文本（标识符无法作为绑定参数传递），
/// 因此仅允许字母、数字、下划线和 '$'，且不能以数字开头。
pub fn is_safe_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// 生成参数化插入语句
pub fn insert_sql(schema: &str, table: &str) -> String {
    format!(
        "INSERT INTO {}.{} ({}) VALUES ($1, $2, $3, $4)",
        schema, table, INSERT_COLUMNS
    )
}

/// 建表相关的 SQL 语句
pub mod create_table_sql {
    /// 生成建 schema 语句
    pub fn create_schema(schema: &str) -> String {
        format!("CREATE SCHEMA IF NOT EXISTS {}", schema)
    }

    /// 生成建表语句
    pub fn create_table(schema: &str, table: &str) -> String {
        format!(
            r#"CREATE TABLE IF NOT EXISTS {schema}.{table} (
    time TIMESTAMP NOT NULL,
    source TEXT NOT NULL,
    alert_level TEXT NOT NULL,
    message TEXT NOT NULL
)"#,
            schema = schema,
            table = table,
        )
    }

    /// 生成 time 列索引语句
    pub fn create_time_index(schema: &str, table: &str) -> String {
        format!(
            "CREATE INDEX IF NOT EXISTS idx_{table}_time ON {schema}.{table}(time)",
            schema = schema,
            table = table,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_identifiers() {
        assert!(is_safe_identifier("system_logs"));
        assert!(is_safe_identifier("hmb_data"));
        assert!(is_safe_identifier("_private"));
        assert!(is_safe_identifier("t1"));
        assert!(is_safe_identifier("pay$roll"));
    }

    #[test]
    fn test_unsafe_identifiers() {
        assert!(!is_safe_identifier(""));
        assert!(!is_safe_identifier("1logs"));
        assert!(!is_safe_identifier("logs; DROP TABLE users"));
        assert!(!is_safe_identifier("logs name"));
        assert!(!is_safe_identifier("logs\"--"));
        assert!(!is_safe_identifier("日志"));
    }

    #[test]
    fn test_insert_sql_shape() {
        let sql = insert_sql("hmb_data", "system_logs");
        assert!(sql.starts_with("INSERT INTO hmb_data.system_logs"));
        assert!(sql.contains(INSERT_COLUMNS));
        assert!(sql.contains("$1"));
        assert!(sql.contains("$4"));
        // 值全部通过绑定参数传递
        assert!(!sql.contains('\''));
    }

    #[test]
    fn test_create_table_sql_contains_columns() {
        let sql = create_table_sql::create_table("hmb_data", "system_logs");
        assert!(sql.contains("CREATE TABLE IF NOT EXISTS hmb_data.system_logs"));
        for column in ["time", "source", "alert_level", "message"] {
            assert!(sql.contains(column));
        }
    }

    #[test]
    fn test_create_schema_and_index_sql() {
        let schema_sql = create_table_sql::create_schema("hmb_data");
        assert_eq!(schema_sql, "CREATE SCHEMA IF NOT EXISTS hmb_data");

        let index_sql = create_table_sql::create_time_index("hmb_data", "system_logs");
        assert!(index_sql.contains("idx_system_logs_time"));
        assert!(index_sql.contains("hmb_data.system_logs(time)"));
    }
}
