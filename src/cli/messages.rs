//! Console text (zh-CN).

use crate::config::spec::RestartPolicy;

pub const WELCOME: &str = "欢迎使用 Systemd 服务创建工具";
pub const RULE_WIDTH: usize = 40;

pub const NEED_ROOT: &str = "请使用root权限运行此脚本";

pub const PROMPT_NAME: &str = "请输入服务名称: ";
pub const PROMPT_DESCRIPTION: &str = "请输入服务描述 (可选): ";
pub const PROMPT_EXEC: &str = "执行命令: ";
pub const PROMPT_WORKING_DIR: &str = "请输入工作目录 (可选): ";
pub const PROMPT_RESTART: &str = "请输入选项 (1-3) [默认: 1]: ";

pub const INVALID_NAME: &str =
    "错误：服务名称不能为空且只能包含字母、数字、连字符(-)、@符号和下划线(_)";
pub const EMPTY_COMMAND: &str = "错误：命令不能为空";
pub const INVALID_CHOICE: &str = "无效的选项，请重新输入";

pub const RESTART_MENU_TITLE: &str = "请选择重启策略:";

pub const EMPTY_REQUIRED: &str = "错误：服务名称和可执行文件路径不能为空";

pub const STEP_HEADER: &str = "步骤";
pub const RESULT_HEADER: &str = "结果";
pub const STEP_UNIT_FILE: &str = "服务文件";

/// Menu line for a restart policy choice
pub fn restart_option(choice: u8, policy: RestartPolicy) -> String {
    let meaning = match policy {
        RestartPolicy::Always => "总是重启",
        RestartPolicy::OnFailure => "仅在失败时重启",
        RestartPolicy::No => "不自动重启",
    };
    format!("{}. {} ({})", choice, policy, meaning)
}

pub fn already_exists(name: &str) -> String {
    format!("错误：服务 {} 已存在", name)
}

pub fn command_not_found(command: &str) -> String {
    format!("警告：命令 {} 在系统中未找到，但仍将继续创建服务", command)
}

pub fn created(name: &str) -> String {
    format!("服务 {} 创建成功", name)
}

pub fn activated(name: &str) -> String {
    format!(
        "服务已启用并启动，可使用 'systemctl status {}' 查看状态",
        name
    )
}

pub fn activation_failed(error: &dyn std::fmt::Display) -> String {
    format!("警告：服务文件已创建，但启动服务时出错: {}", error)
}

pub fn create_failed(error: &dyn std::fmt::Display) -> String {
    format!("创建服务失败: {}", error)
}
