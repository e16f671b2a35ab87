// nativeSpecializeAppProcess 的历史 ABI 变体（Android 10 引入）
// 该家族就地特化当前进程，无返回值；恢复与 post 扇出无条件执行
use crate::hooks::args::SpecializeAppProcessArgs;
use crate::hooks::{dispatch, slots};
use jni_sys::{JNI_FALSE, JNIEnv, jboolean, jclass, jint, jintArray, jobjectArray, jstring};
use std::mem::transmute;
use std::ptr;

type SpecializeAppProcessQFn = unsafe extern "system" fn(
    env: *mut JNIEnv,
    clazz: jclass,
    uid: jint,
    gid: jint,
    gids: jintArray,
    runtime_flags: jint,
    rlimits: jobjectArray,
    mount_external: jint,
    se_info: jstring,
    nice_name: jstring,
    start_child_zygote: jboolean,
    instruction_set: jstring,
    app_data_dir: jstring,
);

type SpecializeAppProcessQAlternativeFn = unsafe extern "system" fn(
    env: *mut JNIEnv,
    clazz: jclass,
    uid: jint,
    gid: jint,
    gids: jintArray,
    runtime_flags: jint,
    rlimits: jobjectArray,
    mount_external: jint,
    se_info: jstring,
    nice_name: jstring,
    start_child_zygote: jboolean,
    instruction_set: jstring,
    app_data_dir: jstring,
    is_top_app: jboolean,
);

type SpecializeAppProcessRFn = unsafe extern "system" fn(
    env: *mut JNIEnv,
    clazz: jclass,
    uid: jint,
    gid: jint,
    gids: jintArray,
    runtime_flags: jint,
    rlimits: jobjectArray,
    mount_external: jint,
    se_info: jstring,
    nice_name: jstring,
    start_child_zygote: jboolean,
    instruction_set: jstring,
    app_data_dir: jstring,
    is_top_app: jboolean,
    pkg_data_info_list: jobjectArray,
    whitelisted_data_info_list: jobjectArray,
    bind_mount_app_data_dirs: jboolean,
    bind_mount_app_storage_dirs: jboolean,
);

type SpecializeAppProcessRDp3Fn = unsafe extern "system" fn(
    env: *mut JNIEnv,
    clazz: jclass,
    uid: jint,
    gid: jint,
    gids: jintArray,
    runtime_flags: jint,
    rlimits: jobjectArray,
    mount_external: jint,
    se_info: jstring,
    nice_name: jstring,
    start_child_zygote: jboolean,
    instruction_set: jstring,
    app_data_dir: jstring,
    is_top_app: jboolean,
    pkg_data_info_list: jobjectArray,
    bind_mount_app_storage_dirs: jboolean,
);

type SpecializeAppProcessRDp2Fn = unsafe extern "system" fn(
    env: *mut JNIEnv,
    clazz: jclass,
    uid: jint,
    gid: jint,
    gids: jintArray,
    runtime_flags: jint,
    rlimits: jobjectArray,
    mount_external: jint,
    se_info: jstring,
    nice_name: jstring,
    start_child_zygote: jboolean,
    instruction_set: jstring,
    app_data_dir: jstring,
    is_top_app: jboolean,
    pkg_data_info_list: jobjectArray,
);

type SpecializeAppProcessSamsungQFn = unsafe extern "system" fn(
    env: *mut JNIEnv,
    clazz: jclass,
    uid: jint,
    gid: jint,
    gids: jintArray,
    runtime_flags: jint,
    rlimits: jobjectArray,
    mount_external: jint,
    se_info: jstring,
    space: jint,
    access_info: jint,
    nice_name: jstring,
    start_child_zygote: jboolean,
    instruction_set: jstring,
    app_data_dir: jstring,
);

// Android 10
pub unsafe extern "system" fn specialize_app_process_q(
    env: *mut JNIEnv,
    clazz: jclass,
    uid: jint,
    gid: jint,
    gids: jintArray,
    runtime_flags: jint,
    rlimits: jobjectArray,
    mount_external: jint,
    se_info: jstring,
    nice_name: jstring,
    start_child_zygote: jboolean,
    instruction_set: jstring,
    app_data_dir: jstring,
) {
    let mut args = SpecializeAppProcessArgs {
        uid,
        gid,
        gids,
        runtime_flags,
        rlimits,
        mount_external,
        se_info,
        nice_name,
        start_child_zygote,
        instruction_set,
        app_data_dir,
        is_top_app: JNI_FALSE,
        pkg_data_info_list: ptr::null_mut(),
        whitelisted_data_info_list: ptr::null_mut(),
        bind_mount_app_data_dirs: JNI_FALSE,
        bind_mount_app_storage_dirs: JNI_FALSE,
    };

    dispatch::specialize_app_process_pre(env, clazz, &mut args);

    let orig: SpecializeAppProcessQFn = transmute(slots::specialize_app_process_addr());
    orig(
        env,
        clazz,
        args.uid,
        args.gid,
        args.gids,
        args.runtime_flags,
        args.rlimits,
        args.mount_external,
        args.se_info,
        args.nice_name,
        args.start_child_zygote,
        args.instruction_set,
        args.app_data_dir,
    );

    dispatch::specialize_app_process_post(env, clazz);
}

// Android 10 部分构建：追加 isTopApp
pub unsafe extern "system" fn specialize_app_process_q_alternative(
    env: *mut JNIEnv,
    clazz: jclass,
    uid: jint,
    gid: jint,
    gids: jintArray,
    runtime_flags: jint,
    rlimits: jobjectArray,
    mount_external: jint,
    se_info: jstring,
    nice_name: jstring,
    start_child_zygote: jboolean,
    instruction_set: jstring,
    app_data_dir: jstring,
    is_top_app: jboolean,
) {
    let mut args = SpecializeAppProcessArgs {
        uid,
        gid,
        gids,
        runtime_flags,
        rlimits,
        mount_external,
        se_info,
        nice_name,
        start_child_zygote,
        instruction_set,
        app_data_dir,
        is_top_app,
        pkg_data_info_list: ptr::null_mut(),
        whitelisted_data_info_list: ptr::null_mut(),
        bind_mount_app_data_dirs: JNI_FALSE,
        bind_mount_app_storage_dirs: JNI_FALSE,
    };

    dispatch::specialize_app_process_pre(env, clazz, &mut args);

    let orig: SpecializeAppProcessQAlternativeFn = transmute(slots::specialize_app_process_addr());
    orig(
        env,
        clazz,
        args.uid,
        args.gid,
        args.gids,
        args.runtime_flags,
        args.rlimits,
        args.mount_external,
        args.se_info,
        args.nice_name,
        args.start_child_zygote,
        args.instruction_set,
        args.app_data_dir,
        args.is_top_app,
    );

    dispatch::specialize_app_process_post(env, clazz);
}

// Android 11 正式版
pub unsafe extern "system" fn specialize_app_process_r(
    env: *mut JNIEnv,
    clazz: jclass,
    uid: jint,
    gid: jint,
    gids: jintArray,
    runtime_flags: jint,
    rlimits: jobjectArray,
    mount_external: jint,
    se_info: jstring,
    nice_name: jstring,
    start_child_zygote: jboolean,
    instruction_set: jstring,
    app_data_dir: jstring,
    is_top_app: jboolean,
    pkg_data_info_list: jobjectArray,
    whitelisted_data_info_list: jobjectArray,
    bind_mount_app_data_dirs: jboolean,
    bind_mount_app_storage_dirs: jboolean,
) {
    let mut args = SpecializeAppProcessArgs {
        uid,
        gid,
        gids,
        runtime_flags,
        rlimits,
        mount_external,
        se_info,
        nice_name,
        start_child_zygote,
        instruction_set,
        app_data_dir,
        is_top_app,
        pkg_data_info_list,
        whitelisted_data_info_list,
        bind_mount_app_data_dirs,
        bind_mount_app_storage_dirs,
    };

    dispatch::specialize_app_process_pre(env, clazz, &mut args);

    let orig: SpecializeAppProcessRFn = transmute(slots::specialize_app_process_addr());
    orig(
        env,
        clazz,
        args.uid,
        args.gid,
        args.gids,
        args.runtime_flags,
        args.rlimits,
        args.mount_external,
        args.se_info,
        args.nice_name,
        args.start_child_zygote,
        args.instruction_set,
        args.app_data_dir,
        args.is_top_app,
        args.pkg_data_info_list,
        args.whitelisted_data_info_list,
        args.bind_mount_app_data_dirs,
        args.bind_mount_app_storage_dirs,
    );

    dispatch::specialize_app_process_post(env, clazz);
}

// Android 11 DP3
pub unsafe extern "system" fn specialize_app_process_r_dp3(
    env: *mut JNIEnv,
    clazz: jclass,
    uid: jint,
    gid: jint,
    gids: jintArray,
    runtime_flags: jint,
    rlimits: jobjectArray,
    mount_external: jint,
    se_info: jstring,
    nice_name: jstring,
    start_child_zygote: jboolean,
    instruction_set: jstring,
    app_data_dir: jstring,
    is_top_app: jboolean,
    pkg_data_info_list: jobjectArray,
    bind_mount_app_storage_dirs: jboolean,
) {
    let mut args = SpecializeAppProcessArgs {
        uid,
        gid,
        gids,
        runtime_flags,
        rlimits,
        mount_external,
        se_info,
        nice_name,
        start_child_zygote,
        instruction_set,
        app_data_dir,
        is_top_app,
        pkg_data_info_list,
        whitelisted_data_info_list: ptr::null_mut(),
        bind_mount_app_data_dirs: JNI_FALSE,
        bind_mount_app_storage_dirs,
    };

    dispatch::specialize_app_process_pre(env, clazz, &mut args);

    let orig: SpecializeAppProcessRDp3Fn = transmute(slots::specialize_app_process_addr());
    orig(
        env,
        clazz,
        args.uid,
        args.gid,
        args.gids,
        args.runtime_flags,
        args.rlimits,
        args.mount_external,
        args.se_info,
        args.nice_name,
        args.start_child_zygote,
        args.instruction_set,
        args.app_data_dir,
        args.is_top_app,
        args.pkg_data_info_list,
        args.bind_mount_app_storage_dirs,
    );

    dispatch::specialize_app_process_post(env, clazz);
}

// Android 11 DP2
pub unsafe extern "system" fn specialize_app_process_r_dp2(
    env: *mut JNIEnv,
    clazz: jclass,
    uid: jint,
    gid: jint,
    gids: jintArray,
    runtime_flags: jint,
    rlimits: jobjectArray,
    mount_external: jint,
    se_info: jstring,
    nice_name: jstring,
    start_child_zygote: jboolean,
    instruction_set: jstring,
    app_data_dir: jstring,
    is_top_app: jboolean,
    pkg_data_info_list: jobjectArray,
) {
    let mut args = SpecializeAppProcessArgs {
        uid,
        gid,
        gids,
        runtime_flags,
        rlimits,
        mount_external,
        se_info,
        nice_name,
        start_child_zygote,
        instruction_set,
        app_data_dir,
        is_top_app,
        pkg_data_info_list,
        whitelisted_data_info_list: ptr::null_mut(),
        bind_mount_app_data_dirs: JNI_FALSE,
        bind_mount_app_storage_dirs: JNI_FALSE,
    };

    dispatch::specialize_app_process_pre(env, clazz, &mut args);

    let orig: SpecializeAppProcessRDp2Fn = transmute(slots::specialize_app_process_addr());
    orig(
        env,
        clazz,
        args.uid,
        args.gid,
        args.gids,
        args.runtime_flags,
        args.rlimits,
        args.mount_external,
        args.se_info,
        args.nice_name,
        args.start_child_zygote,
        args.instruction_set,
        args.app_data_dir,
        args.is_top_app,
        args.pkg_data_info_list,
    );

    dispatch::specialize_app_process_post(env, clazz);
}

// Samsung Android 10：se_info 后插入 space/access_info，hook 不感知
pub unsafe extern "system" fn specialize_app_process_samsung_q(
    env: *mut JNIEnv,
    clazz: jclass,
    uid: jint,
    gid: jint,
    gids: jintArray,
    runtime_flags: jint,
    rlimits: jobjectArray,
    mount_external: jint,
    se_info: jstring,
    space: jint,
    access_info: jint,
    nice_name: jstring,
    start_child_zygote: jboolean,
    instruction_set: jstring,
    app_data_dir: jstring,
) {
    let mut args = SpecializeAppProcessArgs {
        uid,
        gid,
        gids,
        runtime_flags,
        rlimits,
        mount_external,
        se_info,
        nice_name,
        start_child_zygote,
        instruction_set,
        app_data_dir,
        is_top_app: JNI_FALSE,
        pkg_data_info_list: ptr::null_mut(),
        whitelisted_data_info_list: ptr::null_mut(),
        bind_mount_app_data_dirs: JNI_FALSE,
        bind_mount_app_storage_dirs: JNI_FALSE,
    };

    dispatch::specialize_app_process_pre(env, clazz, &mut args);

    let orig: SpecializeAppProcessSamsungQFn = transmute(slots::specialize_app_process_addr());
    orig(
        env,
        clazz,
        args.uid,
        args.gid,
        args.gids,
        args.runtime_flags,
        args.rlimits,
        args.mount_external,
        args.se_info,
        space,
        access_info,
        args.nice_name,
        args.start_child_zygote,
        args.instruction_set,
        args.app_data_dir,
    );

    dispatch::specialize_app_process_post(env, clazz);
}

#[cfg(test)]
mod tests;
