use rust_decimal::Decimal;
use shared::models::{MenuCatalog, TableSeed};

use crate::ledger::{LedgerError, LedgerResult};

const DEFAULT_TABLES: &str = "1:4,2:4,3:3,4:4,5:3";
const DEFAULT_MENU: &str = "Coffee=3,Tea=2.5,Sandwich=5,Cake=4";
const DEFAULT_SPLIT_TABLE_CAPACITY: i32 = 4;

/// 会话配置 - 桌台布局、菜单与日志的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | CAFE_TABLES | 1:4,2:4,3:3,4:4,5:3 | 初始桌台 `id:容量` |
/// | CAFE_MENU | Coffee=3,Tea=2.5,Sandwich=5,Cake=4 | 菜单 `名称=单价` |
/// | SPLIT_TABLE_CAPACITY | 4 | 拆台恢复的桌台容量 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_JSON | false | JSON 格式日志 |
/// | LOG_DIR | (未设置) | 按天滚动的日志目录 |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// CAFE_TABLES="1:2,2:6" CAFE_MENU="Latte=3.8" cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 初始桌台，按列表顺序
    pub tables: Vec<TableSeed>,
    /// 菜单价目表，会话期间不可变
    pub menu: MenuCatalog,
    /// 拆台恢复的桌台容量
    pub split_table_capacity: i32,
    /// 日志级别 (EnvFilter 语法)
    pub log_level: String,
    /// 是否输出 JSON 日志
    pub log_json: bool,
    /// 日志文件目录，未设置时只写 stderr
    pub log_dir: Option<String>,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 解析失败、已回退到默认值的配置项
    pub fallbacks: Vec<ConfigFallback>,
}

/// 无法解析的配置值
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFallback {
    pub key: &'static str,
    pub value: String,
    pub error: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 未设置的变量使用默认值；无法解析的变量回退到默认值，
    /// 并记录在 `fallbacks` 中，待日志初始化后由 [`Config::warn_fallbacks`] 输出
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 通过任意键值查找加载配置
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut fallbacks = Vec::new();
        let tables = parse_or_default(&mut fallbacks, &lookup, "CAFE_TABLES", parse_tables)
            .unwrap_or_else(default_tables);
        let menu = parse_or_default(&mut fallbacks, &lookup, "CAFE_MENU", parse_menu)
            .unwrap_or_else(default_menu);
        let split_table_capacity =
            parse_or_default(&mut fallbacks, &lookup, "SPLIT_TABLE_CAPACITY", parse_capacity)
                .unwrap_or(DEFAULT_SPLIT_TABLE_CAPACITY);
        let log_json = parse_or_default(&mut fallbacks, &lookup, "LOG_JSON", |raw| {
            raw.trim().parse::<bool>()
        })
        .unwrap_or(false);

        Self {
            tables,
            menu,
            split_table_capacity,
            log_level: lookup("LOG_LEVEL")
                .filter(|level| !level.trim().is_empty())
                .unwrap_or_else(|| "info".into()),
            log_json,
            log_dir: lookup("LOG_DIR").filter(|dir| !dir.trim().is_empty()),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            fallbacks,
        }
    }

    /// 替换桌台布局和菜单，其余配置仍来自环境变量
    ///
    /// 主要用于测试
    pub fn with_overrides(tables: Vec<TableSeed>, menu: MenuCatalog) -> Self {
        let mut config = Self::from_env();
        config.tables = tables;
        config.menu = menu;
        config
    }

    /// 输出回退到默认值的配置项 (需在日志初始化之后调用)
    pub fn warn_fallbacks(&self) {
        for fallback in &self.fallbacks {
            tracing::warn!(
                key = fallback.key,
                value = %fallback.value,
                error = %fallback.error,
                "Invalid config value, using default"
            );
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// 解析配置值；失败时记录到 `fallbacks` 并返回 `None`
fn parse_or_default<T, E: std::fmt::Display>(
    fallbacks: &mut Vec<ConfigFallback>,
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    parse: impl FnOnce(&str) -> Result<T, E>,
) -> Option<T> {
    let raw = lookup(key)?;
    match parse(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            fallbacks.push(ConfigFallback {
                key,
                value: raw,
                error: e.to_string(),
            });
            None
        }
    }
}

fn parse_capacity(raw: &str) -> LedgerResult<i32> {
    raw.trim()
        .parse::<i32>()
        .ok()
        .filter(|c| *c > 0)
        .ok_or_else(|| LedgerError::InvalidConfig(format!("bad capacity '{}'", raw)))
}

fn default_tables() -> Vec<TableSeed> {
    parse_tables(DEFAULT_TABLES).unwrap_or_default()
}

fn default_menu() -> MenuCatalog {
    parse_menu(DEFAULT_MENU).unwrap_or_default()
}

/// 解析逗号分隔的 `id:容量`
pub fn parse_tables(raw: &str) -> LedgerResult<Vec<TableSeed>> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let bad = || LedgerError::InvalidConfig(format!("bad table entry '{}'", entry));
            let (id, capacity) = entry.split_once(':').ok_or_else(bad)?;
            Ok(TableSeed {
                id: id.trim().parse().map_err(|_| bad())?,
                capacity: capacity.trim().parse().map_err(|_| bad())?,
            })
        })
        .collect()
}

/// 解析逗号分隔的 `名称=单价`
pub fn parse_menu(raw: &str) -> LedgerResult<MenuCatalog> {
    let items = raw
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let bad = || LedgerError::InvalidConfig(format!("bad menu entry '{}'", entry));
            let (name, price) = entry.split_once('=').ok_or_else(bad)?;
            let price: Decimal = price.trim().parse().map_err(|_| bad())?;
            Ok((name.trim().to_string(), price))
        })
        .collect::<LedgerResult<Vec<_>>>()?;
    Ok(MenuCatalog::new(items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        let ids: Vec<(i64, i32)> = config.tables.iter().map(|t| (t.id, t.capacity)).collect();
        assert_eq!(ids, vec![(1, 4), (2, 4), (3, 3), (4, 4), (5, 3)]);
        assert_eq!(config.menu.len(), 4);
        assert_eq!(config.menu.price_of("Tea"), Some(Decimal::new(25, 1)));
        assert_eq!(config.split_table_capacity, 4);
        assert_eq!(config.log_level, "info");
        assert!(!config.log_json);
        assert!(config.log_dir.is_none());
        assert!(config.is_development());
        assert!(!config.is_production());
    }

    #[test]
    fn test_reads_variables() {
        let config = config_from(&[
            ("CAFE_TABLES", "10:2, 11:6"),
            ("CAFE_MENU", "Latte=3.80,Scone=2"),
            ("SPLIT_TABLE_CAPACITY", "6"),
            ("LOG_LEVEL", "debug"),
            ("LOG_JSON", "true"),
            ("LOG_DIR", "/tmp/cafe"),
            ("ENVIRONMENT", "production"),
        ]);
        assert_eq!(config.tables, vec![
            TableSeed { id: 10, capacity: 2 },
            TableSeed { id: 11, capacity: 6 },
        ]);
        assert_eq!(config.menu.price_of("Latte"), Some(Decimal::new(380, 2)));
        assert_eq!(config.split_table_capacity, 6);
        assert_eq!(config.log_level, "debug");
        assert!(config.log_json);
        assert_eq!(config.log_dir.as_deref(), Some("/tmp/cafe"));
        assert!(config.is_production());
    }

    #[test]
    fn test_bad_values_fall_back_to_defaults() {
        let config = config_from(&[
            ("CAFE_TABLES", "1-4"),
            ("CAFE_MENU", "Coffee:3"),
            ("SPLIT_TABLE_CAPACITY", "-2"),
            ("LOG_DIR", "  "),
        ]);
        assert_eq!(config.tables.len(), 5);
        assert!(config.menu.contains("Coffee"));
        assert_eq!(config.split_table_capacity, 4);
        assert!(config.log_dir.is_none());

        let keys: Vec<&str> = config.fallbacks.iter().map(|f| f.key).collect();
        assert_eq!(keys, vec!["CAFE_TABLES", "CAFE_MENU", "SPLIT_TABLE_CAPACITY"]);
        assert_eq!(config.fallbacks[2].value, "-2");
    }

    #[test]
    fn test_log_settings_come_from_config() {
        let config = config_from(&[("LOG_LEVEL", "cafe_ledger=trace"), ("LOG_JSON", "yes")]);
        assert_eq!(config.log_level, "cafe_ledger=trace");
        assert!(!config.log_json);
        assert_eq!(config.fallbacks.len(), 1);
        assert_eq!(config.fallbacks[0].key, "LOG_JSON");

        assert!(config_from(&[]).fallbacks.is_empty());
    }

    #[test]
    fn test_parse_tables_errors() {
        assert!(parse_tables("1:x").is_err());
        assert!(parse_tables("a:4").is_err());
        assert!(parse_tables("3").is_err());
        assert!(parse_tables("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_menu_errors() {
        assert!(parse_menu("Coffee=cheap").is_err());
        assert!(parse_menu("Coffee").is_err());
        // 单价范围在创建账本时校验
        assert_eq!(
            parse_menu("Water=0").unwrap().price_of("Water"),
            Some(Decimal::ZERO)
        );
    }
}
