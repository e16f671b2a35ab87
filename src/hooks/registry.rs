// 模块注册表：仅追加，进程生命周期内持有全部模块
// 注册应在任何 trampoline 运行之前完成，分发期间只做只读遍历
use crate::api::Module;
use crate::errno::Errno;
use once_cell::sync::Lazy;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

// RwLock poison 恢复扩展，避免持锁线程 panic 后引发连锁 panic
pub(crate) trait RwLockPoisonRecover<T> {
    fn read_or_poison(&self) -> RwLockReadGuard<'_, T>;
    fn write_or_poison(&self) -> RwLockWriteGuard<'_, T>;
}

impl<T> RwLockPoisonRecover<T> for RwLock<T> {
    fn read_or_poison(&self) -> RwLockReadGuard<'_, T> {
        self.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_or_poison(&self) -> RwLockWriteGuard<'_, T> {
        self.write().unwrap_or_else(|e| e.into_inner())
    }
}

static MODULES: Lazy<RwLock<Vec<Module>>> = Lazy::new(|| RwLock::new(Vec::new()));

pub(crate) fn register(module: Module) -> Errno {
    if module.name.is_empty() {
        return Errno::InvalidArg;
    }

    let mut modules = MODULES.write_or_poison();
    if modules.iter().any(|existing| existing.name == module.name) {
        return Errno::Dup;
    }

    crate::log::debug(format_args!("module registered: {}", module.name));
    modules.push(module);
    Errno::Ok
}

pub(crate) fn count() -> usize {
    MODULES.read_or_poison().len()
}

// 分发期间持有读锁遍历；hook 回调内不得再注册模块
pub(crate) fn with_modules<R>(f: impl FnOnce(&[Module]) -> R) -> R {
    let modules = MODULES.read_or_poison();
    f(&modules)
}

#[cfg(test)]
pub(crate) fn reset() {
    MODULES.write_or_poison().clear();
}
