// nativeForkAndSpecialize 的历史 ABI 变体
// 每个适配函数：填默认值 -> pre 扇出 -> 按本变体形参顺序调用原始实现 -> post 扇出 -> 透传返回值
use crate::hooks::args::ForkAndSpecializeArgs;
use crate::hooks::{dispatch, slots};
use jni_sys::{JNI_FALSE, JNIEnv, jboolean, jclass, jint, jintArray, jobjectArray, jstring};
use std::mem::transmute;
use std::ptr;

type ForkAndSpecializeMarshmallowFn = unsafe extern "system" fn(
    env: *mut JNIEnv,
    clazz: jclass,
    uid: jint,
    gid: jint,
    gids: jintArray,
    debug_flags: jint,
    rlimits: jobjectArray,
    mount_external: jint,
    se_info: jstring,
    se_name: jstring,
    fds_to_close: jintArray,
    instruction_set: jstring,
    app_data_dir: jstring,
) -> jint;

type ForkAndSpecializeOreoFn = unsafe extern "system" fn(
    env: *mut JNIEnv,
    clazz: jclass,
    uid: jint,
    gid: jint,
    gids: jintArray,
    debug_flags: jint,
    rlimits: jobjectArray,
    mount_external: jint,
    se_info: jstring,
    se_name: jstring,
    fds_to_close: jintArray,
    fds_to_ignore: jintArray,
    instruction_set: jstring,
    app_data_dir: jstring,
) -> jint;

type ForkAndSpecializePFn = unsafe extern "system" fn(
    env: *mut JNIEnv,
    clazz: jclass,
    uid: jint,
    gid: jint,
    gids: jintArray,
    runtime_flags: jint,
    rlimits: jobjectArray,
    mount_external: jint,
    se_info: jstring,
    se_name: jstring,
    fds_to_close: jintArray,
    fds_to_ignore: jintArray,
    is_child_zygote: jboolean,
    instruction_set: jstring,
    app_data_dir: jstring,
) -> jint;

type ForkAndSpecializeQAlternativeFn = unsafe extern "system" fn(
    env: *mut JNIEnv,
    clazz: jclass,
    uid: jint,
    gid: jint,
    gids: jintArray,
    runtime_flags: jint,
    rlimits: jobjectArray,
    mount_external: jint,
    se_info: jstring,
    se_name: jstring,
    fds_to_close: jintArray,
    fds_to_ignore: jintArray,
    is_child_zygote: jboolean,
    instruction_set: jstring,
    app_data_dir: jstring,
    is_top_app: jboolean,
) -> jint;

type ForkAndSpecializeRFn = unsafe extern "system" fn(
    env: *mut JNIEnv,
    clazz: jclass,
    uid: jint,
    gid: jint,
    gids: jintArray,
    runtime_flags: jint,
    rlimits: jobjectArray,
    mount_external: jint,
    se_info: jstring,
    se_name: jstring,
    fds_to_close: jintArray,
    fds_to_ignore: jintArray,
    is_child_zygote: jboolean,
    instruction_set: jstring,
    app_data_dir: jstring,
    is_top_app: jboolean,
    pkg_data_info_list: jobjectArray,
    whitelisted_data_info_list: jobjectArray,
    bind_mount_app_data_dirs: jboolean,
    bind_mount_app_storage_dirs: jboolean,
) -> jint;

type ForkAndSpecializeRDp3Fn = unsafe extern "system" fn(
    env: *mut JNIEnv,
    clazz: jclass,
    uid: jint,
    gid: jint,
    gids: jintArray,
    runtime_flags: jint,
    rlimits: jobjectArray,
    mount_external: jint,
    se_info: jstring,
    se_name: jstring,
    fds_to_close: jintArray,
    fds_to_ignore: jintArray,
    is_child_zygote: jboolean,
    instruction_set: jstring,
    app_data_dir: jstring,
    is_top_app: jboolean,
    pkg_data_info_list: jobjectArray,
    bind_mount_app_storage_dirs: jboolean,
) -> jint;

type ForkAndSpecializeRDp2Fn = unsafe extern "system" fn(
    env: *mut JNIEnv,
    clazz: jclass,
    uid: jint,
    gid: jint,
    gids: jintArray,
    runtime_flags: jint,
    rlimits: jobjectArray,
    mount_external: jint,
    se_info: jstring,
    se_name: jstring,
    fds_to_close: jintArray,
    fds_to_ignore: jintArray,
    is_child_zygote: jboolean,
    instruction_set: jstring,
    app_data_dir: jstring,
    is_top_app: jboolean,
    pkg_data_info_list: jobjectArray,
) -> jint;

type ForkAndSpecializeSamsungPFn = unsafe extern "system" fn(
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
    se_name: jstring,
    fds_to_close: jintArray,
    fds_to_ignore: jintArray,
    is_child_zygote: jboolean,
    instruction_set: jstring,
    app_data_dir: jstring,
) -> jint;

type ForkAndSpecializeSamsungOFn = unsafe extern "system" fn(
    env: *mut JNIEnv,
    clazz: jclass,
    uid: jint,
    gid: jint,
    gids: jintArray,
    debug_flags: jint,
    rlimits: jobjectArray,
    mount_external: jint,
    se_info: jstring,
    space: jint,
    access_info: jint,
    se_name: jstring,
    fds_to_close: jintArray,
    fds_to_ignore: jintArray,
    instruction_set: jstring,
    app_data_dir: jstring,
) -> jint;

type ForkAndSpecializeSamsungNFn = unsafe extern "system" fn(
    env: *mut JNIEnv,
    clazz: jclass,
    uid: jint,
    gid: jint,
    gids: jintArray,
    debug_flags: jint,
    rlimits: jobjectArray,
    mount_external: jint,
    se_info: jstring,
    space: jint,
    access_info: jint,
    se_name: jstring,
    fds_to_close: jintArray,
    instruction_set: jstring,
    app_data_dir: jstring,
    a1: jint,
) -> jint;

type ForkAndSpecializeSamsungMFn = unsafe extern "system" fn(
    env: *mut JNIEnv,
    clazz: jclass,
    uid: jint,
    gid: jint,
    gids: jintArray,
    debug_flags: jint,
    rlimits: jobjectArray,
    mount_external: jint,
    se_info: jstring,
    space: jint,
    access_info: jint,
    se_name: jstring,
    fds_to_close: jintArray,
    instruction_set: jstring,
    app_data_dir: jstring,
) -> jint;

// Android 6.x：无 fdsToIgnore，无 is_child_zygote 及之后的全部尾部字段
pub unsafe extern "system" fn fork_and_specialize_marshmallow(
    env: *mut JNIEnv,
    clazz: jclass,
    uid: jint,
    gid: jint,
    gids: jintArray,
    debug_flags: jint,
    rlimits: jobjectArray,
    mount_external: jint,
    se_info: jstring,
    se_name: jstring,
    fds_to_close: jintArray,
    instruction_set: jstring,
    app_data_dir: jstring,
) -> jint {
    let mut args = ForkAndSpecializeArgs {
        uid,
        gid,
        gids,
        runtime_flags: debug_flags,
        rlimits,
        mount_external,
        se_info,
        nice_name: se_name,
        fds_to_close,
        fds_to_ignore: ptr::null_mut(),
        is_child_zygote: JNI_FALSE,
        instruction_set,
        app_data_dir,
        is_top_app: JNI_FALSE,
        pkg_data_info_list: ptr::null_mut(),
        whitelisted_data_info_list: ptr::null_mut(),
        bind_mount_app_data_dirs: JNI_FALSE,
        bind_mount_app_storage_dirs: JNI_FALSE,
    };

    dispatch::fork_and_specialize_pre(env, clazz, &mut args);

    let orig: ForkAndSpecializeMarshmallowFn = transmute(slots::fork_and_specialize_addr());
    let res = orig(
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
        args.fds_to_close,
        args.instruction_set,
        args.app_data_dir,
    );

    dispatch::fork_and_specialize_post(env, clazz, args.uid, res);
    res
}

// Android 8.x：新增 fdsToIgnore
pub unsafe extern "system" fn fork_and_specialize_oreo(
    env: *mut JNIEnv,
    clazz: jclass,
    uid: jint,
    gid: jint,
    gids: jintArray,
    debug_flags: jint,
    rlimits: jobjectArray,
    mount_external: jint,
    se_info: jstring,
    se_name: jstring,
    fds_to_close: jintArray,
    fds_to_ignore: jintArray,
    instruction_set: jstring,
    app_data_dir: jstring,
) -> jint {
    let mut args = ForkAndSpecializeArgs {
        uid,
        gid,
        gids,
        runtime_flags: debug_flags,
        rlimits,
        mount_external,
        se_info,
        nice_name: se_name,
        fds_to_close,
        fds_to_ignore,
        is_child_zygote: JNI_FALSE,
        instruction_set,
        app_data_dir,
        is_top_app: JNI_FALSE,
        pkg_data_info_list: ptr::null_mut(),
        whitelisted_data_info_list: ptr::null_mut(),
        bind_mount_app_data_dirs: JNI_FALSE,
        bind_mount_app_storage_dirs: JNI_FALSE,
    };

    dispatch::fork_and_specialize_pre(env, clazz, &mut args);

    let orig: ForkAndSpecializeOreoFn = transmute(slots::fork_and_specialize_addr());
    let res = orig(
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
        args.fds_to_close,
        args.fds_to_ignore,
        args.instruction_set,
        args.app_data_dir,
    );

    dispatch::fork_and_specialize_post(env, clazz, args.uid, res);
    res
}

// Android 9：debug_flags 改名 runtime_flags，新增 is_child_zygote
pub unsafe extern "system" fn fork_and_specialize_p(
    env: *mut JNIEnv,
    clazz: jclass,
    uid: jint,
    gid: jint,
    gids: jintArray,
    runtime_flags: jint,
    rlimits: jobjectArray,
    mount_external: jint,
    se_info: jstring,
    se_name: jstring,
    fds_to_close: jintArray,
    fds_to_ignore: jintArray,
    is_child_zygote: jboolean,
    instruction_set: jstring,
    app_data_dir: jstring,
) -> jint {
    let mut args = ForkAndSpecializeArgs {
        uid,
        gid,
        gids,
        runtime_flags,
        rlimits,
        mount_external,
        se_info,
        nice_name: se_name,
        fds_to_close,
        fds_to_ignore,
        is_child_zygote,
        instruction_set,
        app_data_dir,
        is_top_app: JNI_FALSE,
        pkg_data_info_list: ptr::null_mut(),
        whitelisted_data_info_list: ptr::null_mut(),
        bind_mount_app_data_dirs: JNI_FALSE,
        bind_mount_app_storage_dirs: JNI_FALSE,
    };

    dispatch::fork_and_specialize_pre(env, clazz, &mut args);

    let orig: ForkAndSpecializePFn = transmute(slots::fork_and_specialize_addr());
    let res = orig(
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
        args.fds_to_close,
        args.fds_to_ignore,
        args.is_child_zygote,
        args.instruction_set,
        args.app_data_dir,
    );

    dispatch::fork_and_specialize_post(env, clazz, args.uid, res);
    res
}

// Android 10 部分构建：在 P 基础上追加 isTopApp
pub unsafe extern "system" fn fork_and_specialize_q_alternative(
    env: *mut JNIEnv,
    clazz: jclass,
    uid: jint,
    gid: jint,
    gids: jintArray,
    runtime_flags: jint,
    rlimits: jobjectArray,
    mount_external: jint,
    se_info: jstring,
    se_name: jstring,
    fds_to_close: jintArray,
    fds_to_ignore: jintArray,
    is_child_zygote: jboolean,
    instruction_set: jstring,
    app_data_dir: jstring,
    is_top_app: jboolean,
) -> jint {
    let mut args = ForkAndSpecializeArgs {
        uid,
        gid,
        gids,
        runtime_flags,
        rlimits,
        mount_external,
        se_info,
        nice_name: se_name,
        fds_to_close,
        fds_to_ignore,
        is_child_zygote,
        instruction_set,
        app_data_dir,
        is_top_app,
        pkg_data_info_list: ptr::null_mut(),
        whitelisted_data_info_list: ptr::null_mut(),
        bind_mount_app_data_dirs: JNI_FALSE,
        bind_mount_app_storage_dirs: JNI_FALSE,
    };

    dispatch::fork_and_specialize_pre(env, clazz, &mut args);

    let orig: ForkAndSpecializeQAlternativeFn = transmute(slots::fork_and_specialize_addr());
    let res = orig(
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
        args.fds_to_close,
        args.fds_to_ignore,
        args.is_child_zygote,
        args.instruction_set,
        args.app_data_dir,
        args.is_top_app,
    );

    dispatch::fork_and_specialize_post(env, clazz, args.uid, res);
    res
}

// Android 11 正式版：规范化集合的全量形状
pub unsafe extern "system" fn fork_and_specialize_r(
    env: *mut JNIEnv,
    clazz: jclass,
    uid: jint,
    gid: jint,
    gids: jintArray,
    runtime_flags: jint,
    rlimits: jobjectArray,
    mount_external: jint,
    se_info: jstring,
    se_name: jstring,
    fds_to_close: jintArray,
    fds_to_ignore: jintArray,
    is_child_zygote: jboolean,
    instruction_set: jstring,
    app_data_dir: jstring,
    is_top_app: jboolean,
    pkg_data_info_list: jobjectArray,
    whitelisted_data_info_list: jobjectArray,
    bind_mount_app_data_dirs: jboolean,
    bind_mount_app_storage_dirs: jboolean,
) -> jint {
    let mut args = ForkAndSpecializeArgs {
        uid,
        gid,
        gids,
        runtime_flags,
        rlimits,
        mount_external,
        se_info,
        nice_name: se_name,
        fds_to_close,
        fds_to_ignore,
        is_child_zygote,
        instruction_set,
        app_data_dir,
        is_top_app,
        pkg_data_info_list,
        whitelisted_data_info_list,
        bind_mount_app_data_dirs,
        bind_mount_app_storage_dirs,
    };

    dispatch::fork_and_specialize_pre(env, clazz, &mut args);

    let orig: ForkAndSpecializeRFn = transmute(slots::fork_and_specialize_addr());
    let res = orig(
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
        args.fds_to_close,
        args.fds_to_ignore,
        args.is_child_zygote,
        args.instruction_set,
        args.app_data_dir,
        args.is_top_app,
        args.pkg_data_info_list,
        args.whitelisted_data_info_list,
        args.bind_mount_app_data_dirs,
        args.bind_mount_app_storage_dirs,
    );

    dispatch::fork_and_specialize_post(env, clazz, args.uid, res);
    res
}

// Android 11 DP3：无 whitelistedDataInfoList 与 bindMountAppDataDirs
pub unsafe extern "system" fn fork_and_specialize_r_dp3(
    env: *mut JNIEnv,
    clazz: jclass,
    uid: jint,
    gid: jint,
    gids: jintArray,
    runtime_flags: jint,
    rlimits: jobjectArray,
    mount_external: jint,
    se_info: jstring,
    se_name: jstring,
    fds_to_close: jintArray,
    fds_to_ignore: jintArray,
    is_child_zygote: jboolean,
    instruction_set: jstring,
    app_data_dir: jstring,
    is_top_app: jboolean,
    pkg_data_info_list: jobjectArray,
    bind_mount_app_storage_dirs: jboolean,
) -> jint {
    let mut args = ForkAndSpecializeArgs {
        uid,
        gid,
        gids,
        runtime_flags,
        rlimits,
        mount_external,
        se_info,
        nice_name: se_name,
        fds_to_close,
        fds_to_ignore,
        is_child_zygote,
        instruction_set,
        app_data_dir,
        is_top_app,
        pkg_data_info_list,
        whitelisted_data_info_list: ptr::null_mut(),
        bind_mount_app_data_dirs: JNI_FALSE,
        bind_mount_app_storage_dirs,
    };

    dispatch::fork_and_specialize_pre(env, clazz, &mut args);

    let orig: ForkAndSpecializeRDp3Fn = transmute(slots::fork_and_specialize_addr());
    let res = orig(
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
        args.fds_to_close,
        args.fds_to_ignore,
        args.is_child_zygote,
        args.instruction_set,
        args.app_data_dir,
        args.is_top_app,
        args.pkg_data_info_list,
        args.bind_mount_app_storage_dirs,
    );

    dispatch::fork_and_specialize_post(env, clazz, args.uid, res);
    res
}

// Android 11 DP2：尾部只有 pkgDataInfoList
pub unsafe extern "system" fn fork_and_specialize_r_dp2(
    env: *mut JNIEnv,
    clazz: jclass,
    uid: jint,
    gid: jint,
    gids: jintArray,
    runtime_flags: jint,
    rlimits: jobjectArray,
    mount_external: jint,
    se_info: jstring,
    se_name: jstring,
    fds_to_close: jintArray,
    fds_to_ignore: jintArray,
    is_child_zygote: jboolean,
    instruction_set: jstring,
    app_data_dir: jstring,
    is_top_app: jboolean,
    pkg_data_info_list: jobjectArray,
) -> jint {
    let mut args = ForkAndSpecializeArgs {
        uid,
        gid,
        gids,
        runtime_flags,
        rlimits,
        mount_external,
        se_info,
        nice_name: se_name,
        fds_to_close,
        fds_to_ignore,
        is_child_zygote,
        instruction_set,
        app_data_dir,
        is_top_app,
        pkg_data_info_list,
        whitelisted_data_info_list: ptr::null_mut(),
        bind_mount_app_data_dirs: JNI_FALSE,
        bind_mount_app_storage_dirs: JNI_FALSE,
    };

    dispatch::fork_and_specialize_pre(env, clazz, &mut args);

    let orig: ForkAndSpecializeRDp2Fn = transmute(slots::fork_and_specialize_addr());
    let res = orig(
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
        args.fds_to_close,
        args.fds_to_ignore,
        args.is_child_zygote,
        args.instruction_set,
        args.app_data_dir,
        args.is_top_app,
        args.pkg_data_info_list,
    );

    dispatch::fork_and_specialize_post(env, clazz, args.uid, res);
    res
}

// Samsung Android 9：se_info 后插入 space/access_info，hook 不感知这两个字段
pub unsafe extern "system" fn fork_and_specialize_samsung_p(
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
    se_name: jstring,
    fds_to_close: jintArray,
    fds_to_ignore: jintArray,
    is_child_zygote: jboolean,
    instruction_set: jstring,
    app_data_dir: jstring,
) -> jint {
    let mut args = ForkAndSpecializeArgs {
        uid,
        gid,
        gids,
        runtime_flags,
        rlimits,
        mount_external,
        se_info,
        nice_name: se_name,
        fds_to_close,
        fds_to_ignore,
        is_child_zygote,
        instruction_set,
        app_data_dir,
        is_top_app: JNI_FALSE,
        pkg_data_info_list: ptr::null_mut(),
        whitelisted_data_info_list: ptr::null_mut(),
        bind_mount_app_data_dirs: JNI_FALSE,
        bind_mount_app_storage_dirs: JNI_FALSE,
    };

    dispatch::fork_and_specialize_pre(env, clazz, &mut args);

    let orig: ForkAndSpecializeSamsungPFn = transmute(slots::fork_and_specialize_addr());
    let res = orig(
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
        args.fds_to_close,
        args.fds_to_ignore,
        args.is_child_zygote,
        args.instruction_set,
        args.app_data_dir,
    );

    dispatch::fork_and_specialize_post(env, clazz, args.uid, res);
    res
}

// Samsung Android 8
pub unsafe extern "system" fn fork_and_specialize_samsung_o(
    env: *mut JNIEnv,
    clazz: jclass,
    uid: jint,
    gid: jint,
    gids: jintArray,
    debug_flags: jint,
    rlimits: jobjectArray,
    mount_external: jint,
    se_info: jstring,
    space: jint,
    access_info: jint,
    se_name: jstring,
    fds_to_close: jintArray,
    fds_to_ignore: jintArray,
    instruction_set: jstring,
    app_data_dir: jstring,
) -> jint {
    let mut args = ForkAndSpecializeArgs {
        uid,
        gid,
        gids,
        runtime_flags: debug_flags,
        rlimits,
        mount_external,
        se_info,
        nice_name: se_name,
        fds_to_close,
        fds_to_ignore,
        is_child_zygote: JNI_FALSE,
        instruction_set,
        app_data_dir,
        is_top_app: JNI_FALSE,
        pkg_data_info_list: ptr::null_mut(),
        whitelisted_data_info_list: ptr::null_mut(),
        bind_mount_app_data_dirs: JNI_FALSE,
        bind_mount_app_storage_dirs: JNI_FALSE,
    };

    dispatch::fork_and_specialize_pre(env, clazz, &mut args);

    let orig: ForkAndSpecializeSamsungOFn = transmute(slots::fork_and_specialize_addr());
    let res = orig(
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
        args.fds_to_close,
        args.fds_to_ignore,
        args.instruction_set,
        args.app_data_dir,
    );

    dispatch::fork_and_specialize_post(env, clazz, args.uid, res);
    res
}

// Samsung Android 7：尾部多一个未知整型 a1，原样透传
pub unsafe extern "system" fn fork_and_specialize_samsung_n(
    env: *mut JNIEnv,
    clazz: jclass,
    uid: jint,
    gid: jint,
    gids: jintArray,
    debug_flags: jint,
    rlimits: jobjectArray,
    mount_external: jint,
    se_info: jstring,
    space: jint,
    access_info: jint,
    se_name: jstring,
    fds_to_close: jintArray,
    instruction_set: jstring,
    app_data_dir: jstring,
    a1: jint,
) -> jint {
    let mut args = ForkAndSpecializeArgs {
        uid,
        gid,
        gids,
        runtime_flags: debug_flags,
        rlimits,
        mount_external,
        se_info,
        nice_name: se_name,
        fds_to_close,
        fds_to_ignore: ptr::null_mut(),
        is_child_zygote: JNI_FALSE,
        instruction_set,
        app_data_dir,
        is_top_app: JNI_FALSE,
        pkg_data_info_list: ptr::null_mut(),
        whitelisted_data_info_list: ptr::null_mut(),
        bind_mount_app_data_dirs: JNI_FALSE,
        bind_mount_app_storage_dirs: JNI_FALSE,
    };

    dispatch::fork_and_specialize_pre(env, clazz, &mut args);

    let orig: ForkAndSpecializeSamsungNFn = transmute(slots::fork_and_specialize_addr());
    let res = orig(
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
        args.fds_to_close,
        args.instruction_set,
        args.app_data_dir,
        a1,
    );

    dispatch::fork_and_specialize_post(env, clazz, args.uid, res);
    res
}

// Samsung Android 6
pub unsafe extern "system" fn fork_and_specialize_samsung_m(
    env: *mut JNIEnv,
    clazz: jclass,
    uid: jint,
    gid: jint,
    gids: jintArray,
    debug_flags: jint,
    rlimits: jobjectArray,
    mount_external: jint,
    se_info: jstring,
    space: jint,
    access_info: jint,
    se_name: jstring,
    fds_to_close: jintArray,
    instruction_set: jstring,
    app_data_dir: jstring,
) -> jint {
    let mut args = ForkAndSpecializeArgs {
        uid,
        gid,
        gids,
        runtime_flags: debug_flags,
        rlimits,
        mount_external,
        se_info,
        nice_name: se_name,
        fds_to_close,
        fds_to_ignore: ptr::null_mut(),
        is_child_zygote: JNI_FALSE,
        instruction_set,
        app_data_dir,
        is_top_app: JNI_FALSE,
        pkg_data_info_list: ptr::null_mut(),
        whitelisted_data_info_list: ptr::null_mut(),
        bind_mount_app_data_dirs: JNI_FALSE,
        bind_mount_app_storage_dirs: JNI_FALSE,
    };

    dispatch::fork_and_specialize_pre(env, clazz, &mut args);

    let orig: ForkAndSpecializeSamsungMFn = transmute(slots::fork_and_specialize_addr());
    let res = orig(
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
        args.fds_to_close,
        args.instruction_set,
        args.app_data_dir,
    );

    dispatch::fork_and_specialize_post(env, clazz, args.uid, res);
    res
}
