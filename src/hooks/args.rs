// 规范化参数集：每个 trampoline 将所在 ABI 的实参映射进来，
// pre hook 对字段的改写回流到真正的原始调用；
// 当前 ABI 未声明的字段在映射时填入文档化默认值，出站调用时被丢弃
use jni_sys::{jboolean, jint, jintArray, jlong, jobjectArray, jstring};

// fork-and-specialize 家族
// 旧 ABI 缺失的字段默认值：fds_to_ignore/pkg_data_info_list/whitelisted_data_info_list
// 为空指针，is_child_zygote/is_top_app/bind_mount_* 为 JNI_FALSE
#[repr(C)]
pub struct ForkAndSpecializeArgs {
    pub uid: jint,
    pub gid: jint,
    pub gids: jintArray,
    pub runtime_flags: jint,
    pub rlimits: jobjectArray,
    pub mount_external: jint,
    pub se_info: jstring,
    pub nice_name: jstring,
    pub fds_to_close: jintArray,
    pub fds_to_ignore: jintArray,
    pub is_child_zygote: jboolean,
    pub instruction_set: jstring,
    pub app_data_dir: jstring,
    pub is_top_app: jboolean,
    pub pkg_data_info_list: jobjectArray,
    pub whitelisted_data_info_list: jobjectArray,
    pub bind_mount_app_data_dirs: jboolean,
    pub bind_mount_app_storage_dirs: jboolean,
}

// specialize-app-process 家族：就地特化当前进程，无返回值；
// 所有字段统一可变，尾部可选字段遵循与 fork-and-specialize 相同的默认规则
#[repr(C)]
pub struct SpecializeAppProcessArgs {
    pub uid: jint,
    pub gid: jint,
    pub gids: jintArray,
    pub runtime_flags: jint,
    pub rlimits: jobjectArray,
    pub mount_external: jint,
    pub se_info: jstring,
    pub nice_name: jstring,
    pub start_child_zygote: jboolean,
    pub instruction_set: jstring,
    pub app_data_dir: jstring,
    pub is_top_app: jboolean,
    pub pkg_data_info_list: jobjectArray,
    pub whitelisted_data_info_list: jobjectArray,
    pub bind_mount_app_data_dirs: jboolean,
    pub bind_mount_app_storage_dirs: jboolean,
}

// fork-system-server 家族
// Samsung 变体的 space/access_info 只透传给原始调用，不进入规范化集合
#[repr(C)]
pub struct ForkSystemServerArgs {
    pub uid: libc::uid_t,
    pub gid: libc::gid_t,
    pub gids: jintArray,
    pub runtime_flags: jint,
    pub rlimits: jobjectArray,
    pub permitted_capabilities: jlong,
    pub effective_capabilities: jlong,
}
