#![allow(dead_code)]
#![allow(unsafe_op_in_unsafe_fn)]
#![allow(clippy::missing_safety_doc)]
#![allow(clippy::too_many_arguments)]

// 公共 API 层，提供模块注册、原始函数指针登记等操作
mod api;
// 状态码定义
mod errno;
// 分发层：规范化参数、两阶段 hook 分发、trampoline、属性守卫
mod hooks;
// 日志输出，使用 Android logcat，宿主环境回退到 stderr
mod log;
// 版本信息
mod version;

pub use api::{
    ForkAndSpecializePostFunc, ForkAndSpecializePreFunc, ForkSystemServerPostFunc,
    ForkSystemServerPreFunc, Module, RestoreFunc, ShouldSkipUidFunc,
    SpecializeAppProcessPostFunc, SpecializeAppProcessPreFunc, SystemPropertiesSetFunc,
    get_debug, get_version, get_version_str, module_count, register_module, set_debug,
    set_fork_and_specialize_func, set_fork_system_server_func, set_restore_func,
    set_specialize_app_process_func, set_system_properties_set_func,
};
pub use errno::Errno;
pub use hooks::args::{ForkAndSpecializeArgs, ForkSystemServerArgs, SpecializeAppProcessArgs};
pub use hooks::props::system_properties_set;
pub use hooks::trampoline::fork_specialize::{
    fork_and_specialize_marshmallow, fork_and_specialize_oreo, fork_and_specialize_p,
    fork_and_specialize_q_alternative, fork_and_specialize_r, fork_and_specialize_r_dp2,
    fork_and_specialize_r_dp3, fork_and_specialize_samsung_m, fork_and_specialize_samsung_n,
    fork_and_specialize_samsung_o, fork_and_specialize_samsung_p,
};
pub use hooks::trampoline::specialize::{
    specialize_app_process_q, specialize_app_process_q_alternative, specialize_app_process_r,
    specialize_app_process_r_dp2, specialize_app_process_r_dp3, specialize_app_process_samsung_q,
};
pub use hooks::trampoline::system_server::{fork_system_server, fork_system_server_samsung_q};
pub use hooks::trampoline::{
    fork_and_specialize_variant, fork_system_server_variant, specialize_app_process_variant,
};
