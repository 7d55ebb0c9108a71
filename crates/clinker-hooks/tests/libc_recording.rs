//! Integration test: recording interposed libc calls.
//!
//! The mock allocator's `probe_config` path makes a fixed
//! open/read.../close sequence through the interposition wrapper, so
//! the recorder's per-entry-point counts are exactly predictable.

use clinker_core::LibcEntryPoint;
use clinker_hooks::slots;
use clinker_test_utils::{
    counting, recorder, serial, CONFIG_READ_CHUNK, MockAllocator, SlotResetGuard,
};

#[test]
fn unset_slot_leaves_production_path_untouched() {
    let _gate = serial();
    let _reset = SlotResetGuard::new();

    // With the slot unset, probing behaves exactly as in a build
    // without hooks: same bytes back, nothing recorded anywhere.
    recorder::reset();
    let alloc = MockAllocator::new();
    let contents = b"narenas:4,tcache:false".to_vec();
    assert_eq!(alloc.probe_config(&contents), contents);
    assert_eq!(recorder::total(), 0);
}

#[test]
fn records_expected_call_mix() {
    let _gate = serial();
    let _reset = SlotResetGuard::new();
    recorder::reset();

    slots::set_libc(Some(recorder::hook));
    let alloc = MockAllocator::new();
    let contents = vec![0u8; CONFIG_READ_CHUNK * 3];
    alloc.probe_config(&contents);
    slots::set_libc(None);

    let counts = recorder::counts();
    assert_eq!(counts[&LibcEntryPoint::Open], 1);
    // Three full chunks plus the zero-length EOF read.
    assert_eq!(counts[&LibcEntryPoint::Read], 4);
    assert_eq!(counts[&LibcEntryPoint::Close], 1);
    assert_eq!(counts[&LibcEntryPoint::Creat], 0);
    assert_eq!(counts[&LibcEntryPoint::Readlink], 0);
    assert_eq!(recorder::total(), 6);
}

#[test]
fn read_option_routes_through_secure_getenv() {
    let _gate = serial();
    let _reset = SlotResetGuard::new();
    recorder::reset();

    slots::set_libc(Some(recorder::hook));
    let alloc = MockAllocator::new();
    let _ = alloc.read_option("CLINKER_TEST_UTILS_UNSET_OPTION");
    slots::set_libc(None);

    assert_eq!(recorder::count(LibcEntryPoint::SecureGetenv), 1);
    assert_eq!(recorder::total(), 1);
}

#[test]
fn libc_slot_does_not_disturb_arena_slot() {
    let _gate = serial();
    let _reset = SlotResetGuard::new();
    counting::reset();
    recorder::reset();

    slots::set_arena_new(Some(counting::hook));
    slots::set_libc(Some(recorder::hook));

    let mut alloc = MockAllocator::new();
    alloc.create_arena();
    alloc.probe_config(b"x");

    slots::set_libc(None);
    alloc.create_arena();
    alloc.probe_config(b"y");

    slots::set_arena_new(None);

    // Clearing the libc slot stopped libc recording but left arena
    // counting live.
    assert_eq!(counting::count(), 2);
    assert_eq!(recorder::count(LibcEntryPoint::Open), 1);
    assert_eq!(recorder::count(LibcEntryPoint::Close), 1);
}
