// 签名适配层：历史上每个 OS 版本/厂商分支都改动过 fork 家族的 native 方法签名，
// 每个变体对应一个纯适配函数——映射进规范化参数集（缺失字段取文档化默认值），
// 经两阶段分发后以该 ABI 的精确形参顺序调用原始实现，返回值原样透传。
// 各适配函数相互独立，不依赖彼此的默认值。
// 把哪个适配函数接到运行中系统的 native 方法槽位由外部负责（版本/签名探测）。
use std::ffi::c_void;

pub mod fork_specialize;
pub mod specialize;
pub mod system_server;

// JNI 方法描述符，与各变体一一对应，供外部按探测到的签名做表驱动选择
pub const DESC_FORK_AND_SPECIALIZE_MARSHMALLOW: &str =
    "(II[II[[IILjava/lang/String;Ljava/lang/String;[ILjava/lang/String;Ljava/lang/String;)I";
pub const DESC_FORK_AND_SPECIALIZE_OREO: &str =
    "(II[II[[IILjava/lang/String;Ljava/lang/String;[I[ILjava/lang/String;Ljava/lang/String;)I";
pub const DESC_FORK_AND_SPECIALIZE_P: &str =
    "(II[II[[IILjava/lang/String;Ljava/lang/String;[I[IZLjava/lang/String;Ljava/lang/String;)I";
pub const DESC_FORK_AND_SPECIALIZE_Q_ALTERNATIVE: &str =
    "(II[II[[IILjava/lang/String;Ljava/lang/String;[I[IZLjava/lang/String;Ljava/lang/String;Z)I";
pub const DESC_FORK_AND_SPECIALIZE_R_DP2: &str = "(II[II[[IILjava/lang/String;Ljava/lang/String;[I[IZLjava/lang/String;Ljava/lang/String;Z[Ljava/lang/String;)I";
pub const DESC_FORK_AND_SPECIALIZE_R_DP3: &str = "(II[II[[IILjava/lang/String;Ljava/lang/String;[I[IZLjava/lang/String;Ljava/lang/String;Z[Ljava/lang/String;Z)I";
pub const DESC_FORK_AND_SPECIALIZE_R: &str = "(II[II[[IILjava/lang/String;Ljava/lang/String;[I[IZLjava/lang/String;Ljava/lang/String;Z[Ljava/lang/String;[Ljava/lang/String;ZZ)I";
pub const DESC_FORK_AND_SPECIALIZE_SAMSUNG_M: &str =
    "(II[II[[IILjava/lang/String;IILjava/lang/String;[ILjava/lang/String;Ljava/lang/String;)I";
pub const DESC_FORK_AND_SPECIALIZE_SAMSUNG_N: &str =
    "(II[II[[IILjava/lang/String;IILjava/lang/String;[ILjava/lang/String;Ljava/lang/String;I)I";
pub const DESC_FORK_AND_SPECIALIZE_SAMSUNG_O: &str =
    "(II[II[[IILjava/lang/String;IILjava/lang/String;[I[ILjava/lang/String;Ljava/lang/String;)I";
pub const DESC_FORK_AND_SPECIALIZE_SAMSUNG_P: &str =
    "(II[II[[IILjava/lang/String;IILjava/lang/String;[I[IZLjava/lang/String;Ljava/lang/String;)I";

pub const DESC_SPECIALIZE_APP_PROCESS_Q: &str =
    "(II[II[[IILjava/lang/String;Ljava/lang/String;ZLjava/lang/String;Ljava/lang/String;)V";
pub const DESC_SPECIALIZE_APP_PROCESS_Q_ALTERNATIVE: &str =
    "(II[II[[IILjava/lang/String;Ljava/lang/String;ZLjava/lang/String;Ljava/lang/String;Z)V";
pub const DESC_SPECIALIZE_APP_PROCESS_R_DP2: &str = "(II[II[[IILjava/lang/String;Ljava/lang/String;ZLjava/lang/String;Ljava/lang/String;Z[Ljava/lang/String;)V";
pub const DESC_SPECIALIZE_APP_PROCESS_R_DP3: &str = "(II[II[[IILjava/lang/String;Ljava/lang/String;ZLjava/lang/String;Ljava/lang/String;Z[Ljava/lang/String;Z)V";
pub const DESC_SPECIALIZE_APP_PROCESS_R: &str = "(II[II[[IILjava/lang/String;Ljava/lang/String;ZLjava/lang/String;Ljava/lang/String;Z[Ljava/lang/String;[Ljava/lang/String;ZZ)V";
pub const DESC_SPECIALIZE_APP_PROCESS_SAMSUNG_Q: &str =
    "(II[II[[IILjava/lang/String;IILjava/lang/String;ZLjava/lang/String;Ljava/lang/String;)V";

pub const DESC_FORK_SYSTEM_SERVER: &str = "(II[II[[IJJ)I";
pub const DESC_FORK_SYSTEM_SERVER_SAMSUNG_Q: &str = "(II[IIII[[IJJ)I";

// 描述符 -> 适配函数地址；未知描述符返回 None，由外部决定放弃或降级
pub fn fork_and_specialize_variant(descriptor: &str) -> Option<*mut c_void> {
    let func = match descriptor {
        DESC_FORK_AND_SPECIALIZE_MARSHMALLOW => {
            fork_specialize::fork_and_specialize_marshmallow as *mut c_void
        }
        DESC_FORK_AND_SPECIALIZE_OREO => fork_specialize::fork_and_specialize_oreo as *mut c_void,
        DESC_FORK_AND_SPECIALIZE_P => fork_specialize::fork_and_specialize_p as *mut c_void,
        DESC_FORK_AND_SPECIALIZE_Q_ALTERNATIVE => {
            fork_specialize::fork_and_specialize_q_alternative as *mut c_void
        }
        DESC_FORK_AND_SPECIALIZE_R_DP2 => {
            fork_specialize::fork_and_specialize_r_dp2 as *mut c_void
        }
        DESC_FORK_AND_SPECIALIZE_R_DP3 => {
            fork_specialize::fork_and_specialize_r_dp3 as *mut c_void
        }
        DESC_FORK_AND_SPECIALIZE_R => fork_specialize::fork_and_specialize_r as *mut c_void,
        DESC_FORK_AND_SPECIALIZE_SAMSUNG_M => {
            fork_specialize::fork_and_specialize_samsung_m as *mut c_void
        }
        DESC_FORK_AND_SPECIALIZE_SAMSUNG_N => {
            fork_specialize::fork_and_specialize_samsung_n as *mut c_void
        }
        DESC_FORK_AND_SPECIALIZE_SAMSUNG_O => {
            fork_specialize::fork_and_specialize_samsung_o as *mut c_void
        }
        DESC_FORK_AND_SPECIALIZE_SAMSUNG_P => {
            fork_specialize::fork_and_specialize_samsung_p as *mut c_void
        }
        _ => return None,
    };
    Some(func)
}

pub fn specialize_app_process_variant(descriptor: &str) -> Option<*mut c_void> {
    let func = match descriptor {
        DESC_SPECIALIZE_APP_PROCESS_Q => specialize::specialize_app_process_q as *mut c_void,
        DESC_SPECIALIZE_APP_PROCESS_Q_ALTERNATIVE => {
            specialize::specialize_app_process_q_alternative as *mut c_void
        }
        DESC_SPECIALIZE_APP_PROCESS_R_DP2 => {
            specialize::specialize_app_process_r_dp2 as *mut c_void
        }
        DESC_SPECIALIZE_APP_PROCESS_R_DP3 => {
            specialize::specialize_app_process_r_dp3 as *mut c_void
        }
        DESC_SPECIALIZE_APP_PROCESS_R => specialize::specialize_app_process_r as *mut c_void,
        DESC_SPECIALIZE_APP_PROCESS_SAMSUNG_Q => {
            specialize::specialize_app_process_samsung_q as *mut c_void
        }
        _ => return None,
    };
    Some(func)
}

pub fn fork_system_server_variant(descriptor: &str) -> Option<*mut c_void> {
    let func = match descriptor {
        DESC_FORK_SYSTEM_SERVER => system_server::fork_system_server as *mut c_void,
        DESC_FORK_SYSTEM_SERVER_SAMSUNG_Q => {
            system_server::fork_system_server_samsung_q as *mut c_void
        }
        _ => return None,
    };
    Some(func)
}
