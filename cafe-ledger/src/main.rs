use anyhow::Context;
use cafe_ledger::{CafeLedger, print_banner, run_console, setup_environment};
use std::io;

fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 配置, 日志)
    let config = setup_environment();

    // 打印横幅
    print_banner();

    // 2. 启动信息
    tracing::info!(
        environment = %config.environment,
        tables = config.tables.len(),
        menu_items = config.menu.len(),
        "Café ledger starting"
    );

    // 3. 创建账本会话
    let mut ledger = CafeLedger::from_config(&config).context("invalid ledger configuration")?;

    // 4. 处理 stdin 直到 EOF
    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = run_console(&mut ledger, stdin.lock(), stdout.lock())
        .context("console I/O failed")?;

    // 5. 退出前校验不变量
    let violations = ledger.verify();
    if !violations.is_empty() {
        anyhow::bail!("session ended with {} invariant violation(s)", violations.len());
    }
    tracing::info!(
        commands = summary.commands,
        events = ledger.events().len(),
        "Café ledger stopped"
    );
    Ok(())
}
